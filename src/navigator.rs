//! Navigator
//!
//! Owns the current screen, the material picked for commitment and the
//! pending navigation. Any screen may follow any other; a request only has to
//! wait out the loading pause before it commits.
//!
//! Every request hands out a ticket. When requests overlap, only the newest
//! ticket settles, so a slow timer can never drag the user back to a screen
//! they already navigated away from.

use crate::models::Material;
use crate::screen::Screen;

/// Proof of a navigation request, redeemed by [`Navigator::settle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigator {
    current: Screen,
    selected_material: Option<Material>,
    pending: Option<Screen>,
    epoch: u64,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen last committed, before the commitment fallback is applied
    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn selected_material(&self) -> Option<&Material> {
        self.selected_material.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<Screen> {
        self.pending
    }

    /// Screen to render. Commitment needs a selected material and falls back
    /// to the dashboard without one.
    pub fn resolved(&self) -> Screen {
        match self.current {
            Screen::Commitment if self.selected_material.is_none() => Screen::Dashboard,
            screen => screen,
        }
    }

    /// Start a navigation. The screen changes once the returned ticket settles.
    pub fn request(&mut self, target: Screen) -> NavTicket {
        self.epoch += 1;
        self.pending = Some(target);
        NavTicket(self.epoch)
    }

    /// Commit the pending screen if `ticket` is the newest request.
    /// Returns the committed screen, or `None` for a superseded ticket.
    pub fn settle(&mut self, ticket: NavTicket) -> Option<Screen> {
        if ticket.0 != self.epoch {
            return None;
        }
        let target = self.pending.take()?;
        self.enter(target);
        Some(target)
    }

    /// Switch immediately, cancelling any pending request
    pub fn jump(&mut self, target: Screen) {
        self.epoch += 1;
        self.pending = None;
        self.enter(target);
    }

    /// Ticket for the current navigation state. Any later request or jump
    /// invalidates it.
    pub fn checkpoint(&self) -> NavTicket {
        NavTicket(self.epoch)
    }

    /// Jump to `target` only if nothing has navigated since `checkpoint` was
    /// taken. Returns whether the jump happened.
    pub fn jump_from(&mut self, checkpoint: NavTicket, target: Screen) -> bool {
        if checkpoint.0 != self.epoch {
            return false;
        }
        self.jump(target);
        true
    }

    /// Hand a material to the commitment screen and start navigating there
    pub fn select_material(&mut self, material: Material) -> NavTicket {
        self.selected_material = Some(material);
        self.request(Screen::Commitment)
    }

    fn enter(&mut self, target: Screen) {
        // A new sourcing cycle starts from scratch
        if target == Screen::UploadSpecs {
            self.selected_material = None;
        }
        self.current = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use crate::pricing::PaymentMethod;

    fn calacatta() -> Material {
        mock_data::materials().remove(0)
    }

    #[test]
    fn test_starts_on_dashboard() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Dashboard);
        assert!(!nav.is_loading());
        assert!(nav.selected_material().is_none());
    }

    #[test]
    fn test_every_sidebar_screen_is_reachable() {
        let mut nav = Navigator::new();
        for screen in Screen::sidebar_screens() {
            let ticket = nav.request(screen);
            assert!(nav.is_loading());
            assert_eq!(nav.settle(ticket), Some(screen));
            assert_eq!(nav.current(), screen);
            assert_eq!(nav.resolved(), screen);
            assert!(!nav.is_loading());
        }
    }

    #[test]
    fn test_screen_unchanged_until_settled() {
        let mut nav = Navigator::new();
        let _ticket = nav.request(Screen::Wallet);
        assert_eq!(nav.current(), Screen::Dashboard);
        assert_eq!(nav.pending(), Some(Screen::Wallet));
    }

    #[test]
    fn test_newest_request_wins() {
        let mut nav = Navigator::new();
        let first = nav.request(Screen::Results);
        let second = nav.request(Screen::Orders);

        assert_eq!(nav.settle(first), None);
        assert_eq!(nav.current(), Screen::Dashboard);
        assert!(nav.is_loading());

        assert_eq!(nav.settle(second), Some(Screen::Orders));
        assert_eq!(nav.current(), Screen::Orders);
    }

    #[test]
    fn test_ticket_settles_once() {
        let mut nav = Navigator::new();
        let ticket = nav.request(Screen::Analytics);
        assert!(nav.settle(ticket).is_some());
        assert_eq!(nav.settle(ticket), None);
    }

    #[test]
    fn test_commitment_without_material_falls_back() {
        let mut nav = Navigator::new();
        let ticket = nav.request(Screen::Commitment);
        nav.settle(ticket);
        assert_eq!(nav.current(), Screen::Commitment);
        assert_eq!(nav.resolved(), Screen::Dashboard);
    }

    #[test]
    fn test_select_material_opens_commitment() {
        let mut nav = Navigator::new();
        let ticket = nav.select_material(calacatta());
        assert_eq!(nav.settle(ticket), Some(Screen::Commitment));
        assert_eq!(nav.resolved(), Screen::Commitment);
        assert_eq!(nav.selected_material().map(|m| m.id.as_str()), Some("m1"));
    }

    #[test]
    fn test_new_sourcing_cycle_clears_selection() {
        let mut nav = Navigator::new();
        let ticket = nav.select_material(calacatta());
        nav.settle(ticket);

        nav.jump(Screen::Success);
        assert!(nav.selected_material().is_some());

        nav.jump(Screen::UploadSpecs);
        assert!(nav.selected_material().is_none());
    }

    #[test]
    fn test_confirmation_after_leaving_is_dropped() {
        let mut nav = Navigator::new();
        let ticket = nav.select_material(calacatta());
        nav.settle(ticket);
        let confirmed = nav.checkpoint();

        // Back to results, then a different material, before the timer fires
        let ticket = nav.request(Screen::Results);
        nav.settle(ticket);
        let mut other = calacatta();
        other.id = "m2".to_string();
        let ticket = nav.select_material(other);
        nav.settle(ticket);
        assert_eq!(nav.current(), Screen::Commitment);

        assert!(!nav.jump_from(confirmed, Screen::Success));
        assert_eq!(nav.current(), Screen::Commitment);
        assert_eq!(nav.selected_material().map(|m| m.id.as_str()), Some("m2"));
    }

    #[test]
    fn test_confirmation_in_place_jumps() {
        let mut nav = Navigator::new();
        let ticket = nav.select_material(calacatta());
        nav.settle(ticket);
        let confirmed = nav.checkpoint();

        assert!(nav.jump_from(confirmed, Screen::Success));
        assert_eq!(nav.current(), Screen::Success);
    }

    #[test]
    fn test_pending_request_invalidates_checkpoint() {
        let mut nav = Navigator::new();
        let checkpoint = nav.checkpoint();
        let _ticket = nav.request(Screen::Orders);
        assert!(!nav.jump_from(checkpoint, Screen::Success));
        assert!(nav.is_loading());
    }

    #[test]
    fn test_jump_cancels_pending_request() {
        let mut nav = Navigator::new();
        let ticket = nav.request(Screen::Settlement(PaymentMethod::Wire));
        nav.jump(Screen::HelpCenter);

        assert!(!nav.is_loading());
        assert_eq!(nav.settle(ticket), None);
        assert_eq!(nav.current(), Screen::HelpCenter);
    }
}
