use chrono::{Duration, Local, NaiveDate};

/// Wire format of the date inputs.
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Current calendar day in the server's local timezone. Time of day never
/// enters any comparison.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FMT).ok()
}

pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

/// Lower bound for the checkin input.
pub fn checkin_min(today: NaiveDate) -> NaiveDate {
    today
}

/// Lower bound for the checkout input: the day after checkin when checkin is
/// set, otherwise the day after today.
pub fn checkout_min(checkin: &str, today: NaiveDate) -> NaiveDate {
    match parse(checkin) {
        Some(date) => date + Duration::days(1),
        None => today + Duration::days(1),
    }
}

/// One-way checkin → checkout propagation: a checkout at or before the (new)
/// checkin is cleared so the visitor must pick it again under the raised
/// lower bound. Checkout changes never affect checkin.
pub fn propagate_checkin(checkin: &str, checkout: &str) -> String {
    match (parse(checkin), parse(checkout)) {
        (Some(ci), Some(co)) if co <= ci => String::new(),
        _ => checkout.trim().to_string(),
    }
}
