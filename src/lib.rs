//! Zruby Oščadnica — server-rendered site for a mountain-cabin rental.
//!
//! The reservation core (`reservation`) validates fields, enforces the
//! date rules, and drives the submission lifecycle without touching any
//! HTTP types; the actix handlers and askama templates are a thin adapter
//! on top of it.

pub mod config;
pub mod errors;
pub mod gallery;
pub mod handlers;
pub mod notify;
pub mod reservation;
pub mod templates_structs;
