use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use super::pricing::{total_price, RateTable};
use super::stay::StayWindow;

/// Suite preselected when the dialog is opened without one: the first
/// catalog entry.
pub const DEFAULT_SUITE: &str = "The Royal Mesob Suite";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingStep {
    #[default]
    CollectingDetails,
    CollectingPayment,
    Completed,
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStep::CollectingDetails => write!(f, "details"),
            BookingStep::CollectingPayment => write!(f, "payment"),
            BookingStep::Completed => write!(f, "completed"),
        }
    }
}

/// Reasons a session refuses an action. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("check-in and check-out must both be chosen")]
    IncompleteStay,
    #[error("invalid stay range {check_in:?} to {check_out:?}")]
    InvalidRange {
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    },
    #[error("expected step {expected}, session is at {actual}")]
    WrongStep {
        expected: BookingStep,
        actual: BookingStep,
    },
}

/// State behind the reservation dialog for one open/close cycle.
///
/// Nights and price are never stored; they are derived from the stay window,
/// the selected suite and the rate table on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSession {
    open: bool,
    step: BookingStep,
    selected_suite: String,
    stay: StayWindow,
    rates: RateTable,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(RateTable::default())
    }
}

impl BookingSession {
    pub fn new(rates: RateTable) -> Self {
        Self {
            open: false,
            step: BookingStep::CollectingDetails,
            selected_suite: DEFAULT_SUITE.to_string(),
            stay: StayWindow::default(),
            rates,
        }
    }

    /// Shows the dialog with a fresh session. A provided suite replaces the
    /// current selection; otherwise the previous selection is kept.
    pub fn open(&mut self, initial_suite: Option<&str>) {
        self.open = true;
        self.step = BookingStep::CollectingDetails;
        self.stay.clear();
        if let Some(suite) = initial_suite {
            self.selected_suite = suite.to_string();
        }
    }

    /// Hides the dialog and drops all progress, whatever the current step.
    pub fn close(&mut self) {
        self.open = false;
        self.step = BookingStep::CollectingDetails;
        self.stay.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn selected_suite(&self) -> &str {
        &self.selected_suite
    }

    pub fn select_suite(&mut self, suite: impl Into<String>) {
        self.selected_suite = suite.into();
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn set_rates(&mut self, rates: RateTable) {
        self.rates = rates;
    }

    pub fn stay(&self) -> StayWindow {
        self.stay
    }

    /// Accepts a range proposed by the date picker.
    pub fn apply_range(
        &mut self,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> Result<StayWindow, BookingError> {
        let valid = match (check_in, check_out) {
            (_, None) => true,
            (Some(check_in), Some(check_out)) => check_out > check_in,
            (None, Some(_)) => false,
        };
        if !valid {
            return Err(BookingError::InvalidRange {
                check_in,
                check_out,
            });
        }

        self.stay = StayWindow::new(check_in, check_out);
        Ok(self.stay)
    }

    /// Whether the details step may advance.
    pub fn can_advance(&self) -> bool {
        self.stay.is_complete()
    }

    pub fn submit_details(&mut self) -> Result<BookingStep, BookingError> {
        self.expect_step(BookingStep::CollectingDetails)?;
        if !self.can_advance() {
            return Err(BookingError::IncompleteStay);
        }
        self.step = BookingStep::CollectingPayment;
        Ok(self.step)
    }

    /// Payment fields are not inspected.
    pub fn submit_payment(&mut self) -> Result<BookingStep, BookingError> {
        self.expect_step(BookingStep::CollectingPayment)?;
        self.step = BookingStep::Completed;
        Ok(self.step)
    }

    /// Returns to the details form, keeping dates and suite.
    pub fn back(&mut self) -> Result<BookingStep, BookingError> {
        self.expect_step(BookingStep::CollectingPayment)?;
        self.step = BookingStep::CollectingDetails;
        Ok(self.step)
    }

    pub fn nights(&self) -> u32 {
        self.stay.nights()
    }

    pub fn nightly_rate(&self) -> u32 {
        self.rates.nightly_rate(&self.selected_suite)
    }

    pub fn total_price(&self) -> u64 {
        total_price(self.nights(), self.nightly_rate())
    }

    pub fn step_label(&self) -> Option<&'static str> {
        match self.step {
            BookingStep::CollectingDetails => Some("Step 1 of 2"),
            BookingStep::CollectingPayment => Some("Step 2 of 2"),
            BookingStep::Completed => None,
        }
    }

    fn expect_step(&self, expected: BookingStep) -> Result<(), BookingError> {
        if self.step != expected {
            return Err(BookingError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}
