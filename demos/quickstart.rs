use chrono::Utc;
use meeus_calendar::{CalendarDate, JulianDay, Month};

fn main() -> Result<(), meeus_calendar::CalendarError> {
    let now = JulianDay::from_timestamp(&Utc::now())?;
    println!("now: {now}");
    println!("MJD: {}", now.to_mjd());
    println!("weekday: {}", now.week_day());

    let reform = CalendarDate::new(1582, Month::October, 15.0)?;
    let jd = reform.to_julian_day();
    println!("{reform:?} -> {jd} ({})", jd.week_day());

    let eve = (jd - qtty::Days::new(1.0)).to_calendar_date()?;
    println!("the day before was {eve:?}");

    match CalendarDate::new(1582, Month::October, 10.0) {
        Ok(date) => println!("unexpected: {date:?}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}
