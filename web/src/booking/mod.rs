//! Reservation core: stay window, nightly pricing, the two-click range
//! protocol of the date picker and the three-step booking session.
//!
//! Nothing in here touches the reactive runtime, so the components in
//! `crate::components` only ever read from and forward events into these types.

pub mod pricing;
pub mod selection;
pub mod session;
pub mod stay;

pub use pricing::{format_usd, total_price, RateTable, DEFAULT_NIGHTLY_RATE};
pub use selection::{click_day, day_state, next_selection, DayState, MonthView};
pub use session::{BookingError, BookingSession, BookingStep, DEFAULT_SUITE};
pub use stay::StayWindow;
