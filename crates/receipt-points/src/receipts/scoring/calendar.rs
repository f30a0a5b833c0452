use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";
const PURCHASE_TIME_FORMAT: &str = "%H:%M";

pub(crate) fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, PURCHASE_DATE_FORMAT).ok()
}

pub(crate) fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, PURCHASE_TIME_FORMAT).ok()
}

pub(crate) fn is_odd_day(date: NaiveDate) -> bool {
    date.day() % 2 == 1
}

pub(crate) fn in_hour(time: NaiveTime, hour: u32) -> bool {
    time.hour() == hour
}
