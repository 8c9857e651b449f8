use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Date,
    Select,
}

/// Static description of one form field.
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// The reservation form's fields, in display order. `validate_all` walks
/// this table and dispatches on the kind.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "email", kind: FieldKind::Email, required: true },
    FieldSpec { name: "phone", kind: FieldKind::Tel, required: true },
    FieldSpec { name: "checkin", kind: FieldKind::Date, required: true },
    FieldSpec { name: "checkout", kind: FieldKind::Date, required: true },
    FieldSpec { name: "accommodation", kind: FieldKind::Select, required: true },
    FieldSpec { name: "persons", kind: FieldKind::Number, required: true },
    FieldSpec { name: "message", kind: FieldKind::Text, required: false },
];

/// Raw submitted values. Everything stays a string here; parsing happens
/// during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub checkin: String,
    pub checkout: String,
    pub accommodation: String,
    pub persons: String,
    #[serde(default)]
    pub message: String,
}

impl ReservationForm {
    /// Raw value of a field by name. Unknown names resolve to the empty string.
    pub fn value(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "checkin" => &self.checkin,
            "checkout" => &self.checkout,
            "accommodation" => &self.accommodation,
            "persons" => &self.persons,
            "message" => &self.message,
            _ => "",
        }
    }

    /// Flat key→value map handed off to the submission transport.
    pub fn to_field_map(&self) -> BTreeMap<String, String> {
        FIELDS
            .iter()
            .map(|spec| (spec.name.to_string(), self.value(spec.name).to_string()))
            .collect()
    }
}

/// One invalid field with its visitor-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}
