//! Display State
//!
//! The render-relevant state of the widget and the two ingestion points
//! that may change it: the startup fetch ([`DisplayState::prime`]) and the
//! event stream ([`DisplayState::apply`]). Nothing else writes to it.
//!
//! # Design Philosophy
//!
//! The state itself is pure - no channels, no tasks, no clocks. The
//! [`crate::controller::DisplayController`] owns an instance and reacts to
//! the [`ModeChange`] each application reports by starting or stopping the
//! [`crate::timekeeper::TimeKeeper`]; the state never knows a timer task
//! exists.

use crate::event::UpdateEvent;

/// What the widget is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Externally supplied static text.
    Static,
    /// The live elapsed-time counter.
    Timer,
}

/// Mode transition reported by [`DisplayState::apply`].
///
/// The controller uses this to drive the TimeKeeper lifecycle; transitions
/// are only reported on an actual edge, so activation is idempotent by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChange {
    /// Mode switched from static to timer.
    EnteredTimer,
    /// Mode switched from timer to static.
    LeftTimer,
    /// Mode is what it already was.
    Unchanged,
}

/// The widget's persistent display state: current mode plus the static
/// text shown while in [`DisplayMode::Static`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    /// Current display mode.
    mode: DisplayMode,
    /// Static text; meaningful only in static mode, but never cleared by
    /// a timer-mode event.
    text: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PLACEHOLDER)
    }
}

impl DisplayState {
    /// Create a fresh state: static mode, showing the placeholder.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            mode: DisplayMode::Static,
            text: placeholder.into(),
        }
    }

    /// Current display mode.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Current static text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply an update event and report the resulting mode edge.
    ///
    /// The merge rule:
    ///
    /// 1. `mode` becomes `Timer` iff `event.timer` is true; any other
    ///    event (including one with no fields at all) sets `Static`.
    /// 2. `text` is replaced only when `content` is present *and* the
    ///    same event is not a timer event - timer mode suppresses a
    ///    simultaneous content update.
    pub fn apply(&mut self, event: &UpdateEvent) -> ModeChange {
        let was_timer = self.mode == DisplayMode::Timer;

        self.mode = if event.timer {
            DisplayMode::Timer
        } else {
            DisplayMode::Static
        };

        if !event.timer {
            if let Some(content) = &event.content {
                self.text = content.clone();
            }
        }

        match (was_timer, event.timer) {
            (false, true) => ModeChange::EnteredTimer,
            (true, false) => ModeChange::LeftTimer,
            _ => ModeChange::Unchanged,
        }
    }

    /// Apply the startup-fetch result.
    ///
    /// A non-empty string replaces `text` unconditionally - even when an
    /// event already wrote to it, the later-resolving fetch wins. `mode`
    /// is never touched. Returns whether the text was replaced.
    pub fn prime(&mut self, content: String) -> bool {
        if content.is_empty() {
            return false;
        }
        self.text = content;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state() {
        let state = DisplayState::default();
        assert_eq!(state.mode(), DisplayMode::Static);
        assert_eq!(state.text(), "Floater Ready");
    }

    #[test]
    fn test_timer_event_enters_timer_mode() {
        let mut state = DisplayState::default();
        let change = state.apply(&UpdateEvent::timer());
        assert_eq!(change, ModeChange::EnteredTimer);
        assert_eq!(state.mode(), DisplayMode::Timer);
    }

    #[test]
    fn test_timer_event_is_idempotent() {
        let mut state = DisplayState::default();
        assert_eq!(state.apply(&UpdateEvent::timer()), ModeChange::EnteredTimer);
        assert_eq!(state.apply(&UpdateEvent::timer()), ModeChange::Unchanged);
        assert_eq!(state.mode(), DisplayMode::Timer);
    }

    #[test]
    fn test_content_event_sets_text() {
        let mut state = DisplayState::default();
        let change = state.apply(&UpdateEvent::static_text("hello"));
        assert_eq!(change, ModeChange::Unchanged);
        assert_eq!(state.mode(), DisplayMode::Static);
        assert_eq!(state.text(), "hello");
    }

    #[test]
    fn test_absent_timer_means_static() {
        // The `timer` field defaults to false, so an event without it
        // always lands in static mode - including the empty event.
        let mut state = DisplayState::default();
        state.apply(&UpdateEvent::timer());

        let change = state.apply(&UpdateEvent::default());
        assert_eq!(change, ModeChange::LeftTimer);
        assert_eq!(state.mode(), DisplayMode::Static);
    }

    #[test]
    fn test_absent_content_leaves_text_alone() {
        let mut state = DisplayState::default();
        state.apply(&UpdateEvent::static_text("keep me"));
        state.apply(&UpdateEvent::default());
        assert_eq!(state.text(), "keep me");
    }

    #[test]
    fn test_timer_suppresses_simultaneous_content() {
        let mut state = DisplayState::default();
        state.apply(&UpdateEvent::static_text("before"));

        let event = UpdateEvent {
            content: Some("ignored".to_string()),
            timer: true,
        };
        let change = state.apply(&event);
        assert_eq!(change, ModeChange::EnteredTimer);
        assert_eq!(state.text(), "before");
    }

    #[test]
    fn test_content_never_touches_mode() {
        let mut state = DisplayState::default();
        state.apply(&UpdateEvent::static_text("a"));
        assert_eq!(state.mode(), DisplayMode::Static);
        state.apply(&UpdateEvent::static_text("b"));
        assert_eq!(state.mode(), DisplayMode::Static);
    }

    #[test]
    fn test_leaving_timer_with_content_applies_it() {
        let mut state = DisplayState::default();
        state.apply(&UpdateEvent::timer());

        let change = state.apply(&UpdateEvent::static_text("back"));
        assert_eq!(change, ModeChange::LeftTimer);
        assert_eq!(state.mode(), DisplayMode::Static);
        assert_eq!(state.text(), "back");
    }

    #[test]
    fn test_explicit_empty_content_clears_text() {
        // An explicit empty string is an opinion; only absence is not.
        let mut state = DisplayState::default();
        state.apply(&UpdateEvent::static_text("something"));
        state.apply(&UpdateEvent::static_text(""));
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_prime_replaces_text() {
        let mut state = DisplayState::default();
        assert!(state.prime("fetched".to_string()));
        assert_eq!(state.text(), "fetched");
        assert_eq!(state.mode(), DisplayMode::Static);
    }

    #[test]
    fn test_prime_empty_keeps_placeholder() {
        let mut state = DisplayState::default();
        assert!(!state.prime(String::new()));
        assert_eq!(state.text(), "Floater Ready");
    }

    #[test]
    fn test_prime_overwrites_event_content() {
        // Last writer wins: the fetch resolving after an event was
        // applied still replaces the text.
        let mut state = DisplayState::default();
        state.apply(&UpdateEvent::static_text("from event"));
        assert!(state.prime("from fetch".to_string()));
        assert_eq!(state.text(), "from fetch");
    }

    #[test]
    fn test_prime_never_touches_mode() {
        let mut state = DisplayState::default();
        state.apply(&UpdateEvent::timer());
        assert!(state.prime("fetched".to_string()));
        assert_eq!(state.mode(), DisplayMode::Timer);
        assert_eq!(state.text(), "fetched");
    }
}
