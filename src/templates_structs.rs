use actix_session::Session;
use askama::Template;

use crate::notify::{self, DISMISS_MS, Flash};
use crate::reservation::capacity::CapacityEntry;
use crate::reservation::form::{FieldError, ReservationForm};

/// Common context shared by all pages. Templates access these as
/// `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub current_path: String,
    pub flash: Option<Flash>,
    pub dismiss_ms: u32,
}

impl PageContext {
    pub fn build(session: &Session, current_path: &str) -> Self {
        Self {
            app_name: "Zruby Oščadnica".to_string(),
            current_path: current_path.to_string(),
            flash: notify::take_flash(session),
            dismiss_ms: DISMISS_MS,
        }
    }

    /// "active" for the nav link matching the current page.
    pub fn nav_class(&self, path: &str) -> &'static str {
        if self.current_path == path { "active" } else { "" }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub accommodations: Vec<CapacityEntry>,
}

/// One grid tile. Carries the photo's index in the full list so the
/// lightbox links address the controller's ordering even on a filtered view.
pub struct GalleryItemView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub category: String,
}

/// The opened lightbox: current photo plus wrap-around navigation targets.
pub struct LightboxView {
    pub src: String,
    pub alt: String,
    pub counter: String,
    pub prev: usize,
    pub next: usize,
}

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub ctx: PageContext,
    pub filter: String,
    pub categories: Vec<String>,
    pub images: Vec<GalleryItemView>,
    pub lightbox: Option<LightboxView>,
}

/// Per-field error slots for the reservation form groups. One message per
/// group at most.
#[derive(Debug, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub accommodation: Option<String>,
    pub persons: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn from_errors(errors: &[FieldError]) -> Self {
        let mut out = Self::default();
        for err in errors {
            let slot = match err.field {
                "name" => &mut out.name,
                "email" => &mut out.email,
                "phone" => &mut out.phone,
                "checkin" => &mut out.checkin,
                "checkout" => &mut out.checkout,
                "accommodation" => &mut out.accommodation,
                "persons" => &mut out.persons,
                "message" => &mut out.message,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(err.message.clone());
            }
        }
        out
    }
}

#[derive(Template)]
#[template(path = "reservation.html")]
pub struct ReservationTemplate {
    pub ctx: PageContext,
    pub form: ReservationForm,
    pub errors: FieldErrors,
    pub accommodations: Vec<CapacityEntry>,
    pub min_checkin: String,
    pub min_checkout: String,
    pub submit_label: String,
    pub can_submit: bool,
}
