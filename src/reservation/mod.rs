//! Reservation form core: field validation, date rules, and the submission
//! lifecycle. No HTTP types anywhere in this module tree.

pub mod capacity;
pub mod controller;
pub mod dates;
pub mod form;
pub mod transport;
pub mod validate;
