use chrono::NaiveDate;

use super::capacity::CapacityTable;
use super::dates;
use super::form::{FIELDS, FieldError, FieldKind, FieldSpec, ReservationForm};

/// Validate a required value: must be non-empty after trimming.
pub fn validate_required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Toto pole je povinné.".to_string());
    }
    None
}

/// Validate an email: no whitespace, exactly one '@', a non-empty local part,
/// and a dot strictly inside the domain part.
pub fn validate_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let message = "Zadajte platnú emailovú adresu.";
    if trimmed.chars().any(char::is_whitespace) {
        return Some(message.to_string());
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Some(message.to_string());
    };
    if local.is_empty() || domain.contains('@') {
        return Some(message.to_string());
    }
    let interior_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !interior_dot {
        return Some(message.to_string());
    }
    None
}

/// Validate a Slovak phone number: an optional `+421`, `00421`, or single
/// leading `0` prefix followed by exactly 9 digits. Internal whitespace is
/// stripped before matching.
pub fn validate_phone(value: &str) -> Option<String> {
    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let rest = cleaned
        .strip_prefix("+421")
        .or_else(|| cleaned.strip_prefix("00421"))
        .or_else(|| cleaned.strip_prefix('0'))
        .unwrap_or(&cleaned);
    if rest.len() == 9 && rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some("Zadajte platné telefónne číslo (napr. +421 XXX XXX XXX).".to_string())
}

/// Validate the persons count: a positive integer, capped by the selected
/// accommodation's ceiling. An accommodation missing from the table imposes
/// no ceiling.
pub fn validate_persons(
    value: &str,
    accommodation: &str,
    capacities: &CapacityTable,
) -> Option<String> {
    let Ok(num) = value.trim().parse::<i64>() else {
        return Some("Zadajte číslo väčšie ako 0.".to_string());
    };
    if num < 1 {
        return Some("Zadajte číslo väčšie ako 0.".to_string());
    }
    if let Some(entry) = capacities.lookup(accommodation.trim()) {
        if num > i64::from(entry.max_persons) {
            return Some(format!(
                "{} má kapacitu max. {} {}.",
                entry.label,
                entry.max_persons,
                osoby(entry.max_persons)
            ));
        }
    }
    None
}

/// Slovak plural of "person" for the capacity message.
fn osoby(n: u32) -> &'static str {
    match n {
        1 => "osoba",
        2..=4 => "osoby",
        _ => "osôb",
    }
}

/// Validate a date value: must parse as YYYY-MM-DD and must not lie before
/// the current calendar day.
pub fn validate_date(value: &str, today: NaiveDate) -> Option<String> {
    let Some(date) = dates::parse(value) else {
        return Some("Zadajte platný dátum.".to_string());
    };
    if date < today {
        return Some("Dátum nemôže byť v minulosti.".to_string());
    }
    None
}

/// Cross-field rule: checkout must be strictly after checkin. Empty or
/// unparseable values are left to the per-field rules.
pub fn validate_date_range(checkin: &str, checkout: &str) -> Option<String> {
    let (Some(ci), Some(co)) = (dates::parse(checkin), dates::parse(checkout)) else {
        return None;
    };
    if co <= ci {
        return Some("Dátum odchodu musí byť po dátume príchodu.".to_string());
    }
    None
}

/// Validate one field against its spec. First matching rule wins; an empty
/// optional field is always valid.
pub fn validate_field(
    spec: &FieldSpec,
    form: &ReservationForm,
    capacities: &CapacityTable,
    today: NaiveDate,
) -> Option<String> {
    let value = form.value(spec.name);
    if spec.required {
        if let Some(msg) = validate_required(value) {
            return Some(msg);
        }
    }
    if value.trim().is_empty() {
        return None;
    }
    match spec.kind {
        FieldKind::Email => validate_email(value),
        FieldKind::Tel => validate_phone(value),
        FieldKind::Number => validate_persons(value, &form.accommodation, capacities),
        FieldKind::Date => validate_date(value, today),
        FieldKind::Text | FieldKind::Select => None,
    }
}

/// Validate the whole form: every field in declaration order, then the
/// checkin/checkout range rule. The range error is attached to `checkout`
/// and only raised when checkout has no error of its own, so each form
/// group carries at most one message.
pub fn validate_all(
    form: &ReservationForm,
    capacities: &CapacityTable,
    today: NaiveDate,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for spec in FIELDS {
        if let Some(message) = validate_field(spec, form, capacities, today) {
            errors.push(FieldError {
                field: spec.name,
                message,
            });
        }
    }
    if !errors.iter().any(|e| e.field == "checkout") {
        if let Some(message) = validate_date_range(&form.checkin, &form.checkout) {
            errors.push(FieldError {
                field: "checkout",
                message,
            });
        }
    }
    errors
}
