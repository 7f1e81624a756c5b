//! Disclosure State Machine
//!
//! A disclosure is a trigger/content pair where the content (a popover,
//! a menu panel) is visible only while the disclosure is open. This crate
//! owns the open/close state machine and nothing else: rendering, portal
//! mounting, and event wiring stay in the host UI layer.
//!
//! Two states, two operations:
//! - `Closed --toggle--> Open`
//! - `Open --toggle--> Closed`
//! - `Open --dismiss--> Closed`
//! - `Closed --dismiss--> Closed` (ignored)
//!
//! Dismissal is the union of four host-wired sources: focus leaving the
//! content, a pointer interaction outside the content, the escape key, and
//! an explicit close affordance inside the content.
//!
//! The host owns exactly one [`DisclosureController`] per rendered
//! trigger/content pair and re-renders on state change. Controllers share
//! nothing; opening one has no effect on any other.
//!
//! # Example
//!
//! ```rust
//! use bread_disclosure::{DisclosureController, DisclosureState, DismissalSignal};
//!
//! let mut menu = DisclosureController::new();
//! assert!(!menu.is_open());
//!
//! menu.toggle();
//! assert!(menu.content_mounted());
//!
//! menu.dismiss(DismissalSignal::EscapeKey);
//! assert_eq!(menu.state(), DisclosureState::Closed);
//! ```

/// Open/close state of one disclosure
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    /// Content unmounted; dismissal signals are ignored
    #[default]
    Closed,
    /// Content mounted and visible
    Open,
}

impl DisclosureState {
    /// Whether this is the open state.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Next state after a trigger activation.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Next state after a dismissal signal. Dismissal while closed is a
    /// no-op, not a fault.
    pub fn dismissed(self) -> Self {
        Self::Closed
    }
}

/// Why an open disclosure should close
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissalSignal {
    /// Focus left the content region
    FocusOut,
    /// Pointer interaction outside the content region
    PointerOutside,
    /// Escape key pressed
    EscapeKey,
    /// Explicit close affordance inside the content
    CloseAction,
}

/// What caused a recorded transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionCause {
    Toggle,
    Dismissal(DismissalSignal),
}

/// The state machine for one trigger/content pair
///
/// Every mutation is a full state replacement; there is no intermediate
/// state between `Closed` and `Open`.
#[derive(Debug, Default)]
pub struct DisclosureController {
    state: DisclosureState,
    /// History of state transitions (for debugging)
    history: Vec<(DisclosureState, TransitionCause, DisclosureState)>,
}

impl DisclosureController {
    /// Create a controller in the `Closed` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    /// Whether the disclosure is open. The host reads this to restyle the
    /// trigger while the content is showing.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether the content should be mounted. Content exists only in
    /// `Open`; while `Closed` it is fully unmounted, so it holds no focus
    /// and issues no dismissal events of its own.
    pub fn content_mounted(&self) -> bool {
        self.state.is_open()
    }

    /// Trigger activation: open when closed, close when open.
    pub fn toggle(&mut self) -> DisclosureState {
        let from = self.state;
        let to = from.toggled();
        tracing::trace!(?from, ?to, "disclosure toggled");
        self.state = to;
        self.history.push((from, TransitionCause::Toggle, to));
        to
    }

    /// Dismissal signal: close when open, ignore when already closed.
    pub fn dismiss(&mut self, signal: DismissalSignal) -> DisclosureState {
        let from = self.state;
        let to = from.dismissed();
        if from == to {
            return to;
        }
        tracing::trace!(?from, ?signal, "disclosure dismissed");
        self.state = to;
        self.history
            .push((from, TransitionCause::Dismissal(signal), to));
        to
    }

    /// Get transition history.
    pub fn history(&self) -> &[(DisclosureState, TransitionCause, DisclosureState)] {
        &self.history
    }

    /// Clear transition history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_content_unmounted() {
        let controller = DisclosureController::new();
        assert_eq!(controller.state(), DisclosureState::Closed);
        assert!(!controller.is_open());
        assert!(!controller.content_mounted());
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let mut controller = DisclosureController::new();
        assert_eq!(controller.toggle(), DisclosureState::Open);
        assert_eq!(controller.toggle(), DisclosureState::Closed);
    }

    #[test]
    fn every_dismissal_signal_closes_an_open_disclosure() {
        for signal in [
            DismissalSignal::FocusOut,
            DismissalSignal::PointerOutside,
            DismissalSignal::EscapeKey,
            DismissalSignal::CloseAction,
        ] {
            let mut controller = DisclosureController::new();
            controller.toggle();
            assert_eq!(controller.dismiss(signal), DisclosureState::Closed);
            assert!(!controller.content_mounted());
        }
    }

    #[test]
    fn dismissal_while_closed_is_a_noop() {
        let mut controller = DisclosureController::new();
        assert_eq!(
            controller.dismiss(DismissalSignal::PointerOutside),
            DisclosureState::Closed
        );
        assert!(controller.history().is_empty());
    }

    #[test]
    fn content_mounted_only_while_open() {
        let mut controller = DisclosureController::new();
        controller.toggle();
        assert!(controller.content_mounted());
        controller.dismiss(DismissalSignal::CloseAction);
        assert!(!controller.content_mounted());
    }

    #[test]
    fn controllers_do_not_share_state() {
        let mut menu = DisclosureController::new();
        let settings = DisclosureController::new();
        menu.toggle();
        assert!(menu.is_open());
        assert!(!settings.is_open());
    }

    #[test]
    fn history_records_actual_transitions() {
        let mut controller = DisclosureController::new();
        controller.toggle();
        controller.dismiss(DismissalSignal::EscapeKey);
        controller.dismiss(DismissalSignal::EscapeKey);

        let history = controller.history();
        assert_eq!(history.len(), 2);
        assert_eq!(
            history[0],
            (
                DisclosureState::Closed,
                TransitionCause::Toggle,
                DisclosureState::Open
            )
        );
        assert_eq!(
            history[1],
            (
                DisclosureState::Open,
                TransitionCause::Dismissal(DismissalSignal::EscapeKey),
                DisclosureState::Closed
            )
        );

        controller.clear_history();
        assert!(controller.history().is_empty());
    }

    #[test]
    fn pure_transitions_match_controller_behavior() {
        assert_eq!(DisclosureState::Closed.toggled(), DisclosureState::Open);
        assert_eq!(DisclosureState::Open.toggled(), DisclosureState::Closed);
        assert_eq!(DisclosureState::Open.dismissed(), DisclosureState::Closed);
        assert_eq!(DisclosureState::Closed.dismissed(), DisclosureState::Closed);
    }
}
