use chrono::{NaiveDate, TimeZone, Utc};
use meeus_calendar::{
    calendar, CalendarDate, CalendarError, JulianDay, ModifiedJulianDay, Month, Weekday,
};
use qtty::Days;

#[test]
fn calendar_round_trip_across_eras() {
    let years = [-4712, -1000, -1, 0, 1, 837, 1581, 1582, 1583, 1600, 1900, 2000, 2024, 3000];
    let days = [1.0, 1.5, 4.0, 4.99, 15.0, 15.25, 28.0, 28.999];
    for year in years {
        for month in Month::ALL {
            for day in days {
                let Ok(date) = CalendarDate::new(year, month, day) else {
                    continue;
                };
                let jd = date.to_julian_day();
                if jd.value() < 0.0 {
                    continue;
                }
                let back = jd.to_calendar_date().unwrap();
                assert_eq!(back.year(), year, "{date:?}");
                assert_eq!(back.month(), month, "{date:?}");
                assert!((back.day() - day).abs() < 1e-8, "{date:?} -> {back:?}");
            }
        }
    }
}

#[test]
fn spec_fixed_points() {
    let cases = [
        (1977, Month::April, 26.4, 2_443_259.9),
        (2000, Month::January, 1.5, 2_451_545.0),
        (-4712, Month::January, 1.5, 0.0),
        (1600, Month::January, 1.0, 2_305_447.5),
    ];
    for (year, month, day, expected) in cases {
        let jd = JulianDay::from_ymd(year, month, day).unwrap();
        assert!((jd.value() - expected).abs() < 0.1, "{year}-{month}-{day}");
    }
}

#[test]
fn reform_gap_rejection() {
    for day in 6..=14 {
        assert!(matches!(
            CalendarDate::new(1582, Month::October, f64::from(day)),
            Err(CalendarError::InvalidDate { year: 1582, month: 10, .. })
        ));
    }
    for day in [4.0, 4.99, 15.0, 16.0] {
        assert!(CalendarDate::new(1582, Month::October, day).is_ok());
    }
    assert!(CalendarDate::new(1581, Month::October, 10.0).is_ok());
    assert!(CalendarDate::new(1583, Month::October, 10.0).is_ok());
}

#[test]
fn leap_year_rules() {
    for year in [900, 1236, 1600, 2000, 2400] {
        assert!(calendar::is_leap_year(year));
    }
    for year in [750, 1429, 1700, 1800, 1900, 2100] {
        assert!(!calendar::is_leap_year(year));
    }
}

#[test]
fn weekdays_around_the_reform() {
    let cases = [
        (1954, Month::June, 30.0, Weekday::Wednesday),
        (1582, Month::October, 4.0, Weekday::Thursday),
        (1582, Month::October, 15.0, Weekday::Friday),
    ];
    for (year, month, day, expected) in cases {
        assert_eq!(CalendarDate::new(year, month, day).unwrap().week_day(), expected);
    }
}

#[test]
fn day_of_year_fixtures() {
    for (year, month, day, doy) in [
        (1978, Month::November, 14.0, 318),
        (1988, Month::April, 22.0, 113),
    ] {
        let date = CalendarDate::new(year, month, day).unwrap();
        assert_eq!(date.day_of_year(), doy);
        assert_eq!(CalendarDate::from_day_of_year(year, doy).unwrap(), date);
    }
}

#[test]
fn modified_julian_day() {
    let jd = JulianDay::new(2_447_332.0);
    assert!((jd.modified() - 47_331.5).abs() < 1e-9);

    let date = jd.to_calendar_date().unwrap();
    assert_eq!((date.year(), date.month()), (1988, Month::June));
    assert!((date.day() - 19.5).abs() < 1e-9);

    let mjd: ModifiedJulianDay = jd.into();
    assert!((mjd.quantity() - Days::new(47_331.5)).abs() < Days::new(1e-9));
}

#[test]
fn timestamp_and_utc_paths_agree() {
    let utc = Utc.with_ymd_and_hms(1988, 6, 19, 12, 0, 0).unwrap();
    let via_calendar = JulianDay::from_timestamp(&utc).unwrap();
    let via_epoch = JulianDay::from_utc(utc);
    assert!((via_calendar - via_epoch).abs() < Days::new(1e-6));

    let naive = NaiveDate::from_ymd_opt(1988, 6, 19)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert_eq!(JulianDay::from_timestamp(&naive).unwrap(), via_calendar);
}

#[test]
fn negative_julian_day_cannot_be_decoded() {
    let jd = JulianDay::from_ymd(-5000, Month::March, 1.0).unwrap();
    assert!(jd.value() < 0.0);
    assert!(matches!(
        jd.to_calendar_date(),
        Err(CalendarError::NegativeJulianDay { .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn serde_calendar_date_validates_on_deserialize() {
    let date = CalendarDate::new(1582, Month::October, 15.0).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert!(json.contains("\"October\""));
    let back: CalendarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);

    let gap = r#"{"year":1582,"month":"October","day":10.0}"#;
    assert!(serde_json::from_str::<CalendarDate>(gap).is_err());

    let jd = JulianDay::new(2_451_545.0);
    assert_eq!(serde_json::to_string(&jd).unwrap(), "2451545.0");
}
