use leptos::prelude::*;

use crate::booking::{BookingSession, RateTable};

/// Handle the page shell uses to show and dismiss the reservation dialog.
///
/// Provided through context by the layout, so any page can open the dialog
/// with a suite already chosen.
#[derive(Debug, Clone, Copy)]
pub struct BookingController {
    session: RwSignal<BookingSession>,
}

impl Default for BookingController {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingController {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(BookingSession::default()),
        }
    }

    pub fn open(&self, initial_suite: Option<String>) {
        self.session
            .update(|session| session.open(initial_suite.as_deref()));
    }

    pub fn close(&self) {
        self.session.update(BookingSession::close);
    }

    /// Dialog visibility. The dialog body is mounted only while this is true.
    pub fn is_open(&self) -> Memo<bool> {
        let session = self.session;
        Memo::new(move |_| session.with(BookingSession::is_open))
    }

    /// Replaces the built-in rates once the suite catalog has loaded.
    pub fn set_rates(&self, rates: RateTable) {
        self.session.update(|session| session.set_rates(rates));
    }

    pub fn session(&self) -> RwSignal<BookingSession> {
        self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStep;

    #[test]
    fn test_visibility_flips_across_close_and_reopen() {
        let owner = Owner::new();
        owner.with(|| {
            let controller = BookingController::new();
            let is_open = controller.is_open();
            assert!(!is_open.get_untracked());

            controller.open(None);
            assert!(is_open.get_untracked());

            // The step is the same before and after the cycle, so only the
            // visibility flag can tell the widget to remount its body.
            controller.close();
            assert!(!is_open.get_untracked());
            assert_eq!(
                controller.session().with_untracked(BookingSession::step),
                BookingStep::CollectingDetails
            );

            controller.open(None);
            assert!(is_open.get_untracked());
            assert_eq!(
                controller.session().with_untracked(BookingSession::step),
                BookingStep::CollectingDetails
            );
        });
    }

    #[test]
    fn test_catalog_rates_drive_pricing() {
        let owner = Owner::new();
        owner.with(|| {
            let mut suites = crate::catalog::suites();
            suites[1].price = 300;
            let controller = BookingController::new();
            controller.set_rates(RateTable::from_catalog(&suites));
            controller.open(Some("Gheralta Vista Deluxe".to_string()));

            assert_eq!(
                controller.session().with_untracked(BookingSession::nightly_rate),
                300
            );
        });
    }
}
