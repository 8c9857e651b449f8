use actix_session::{Session, SessionInsertError};
use serde::{Deserialize, Serialize};

/// How long the rendered banner stays on screen before it hides itself.
pub const DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

/// A one-shot outcome banner. There is a single slot per session; setting a
/// new flash replaces any pending one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Banner variant class for the template.
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

pub fn set_flash(session: &Session, flash: &Flash) -> Result<(), SessionInsertError> {
    session.insert("flash", flash)
}

/// Take the pending flash, removing it so the banner shows only once.
pub fn take_flash(session: &Session) -> Option<Flash> {
    let flash = session.get::<Flash>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
