pub mod booking_controller;
pub mod booking_widget;
pub mod date_range_picker;
pub mod feedback;
pub mod layout;
pub mod navbar;

// Re-export commonly used types
pub use booking_controller::BookingController;
pub use booking_widget::BookingWidget;
pub use date_range_picker::DateRangePicker;
pub use feedback::{ErrorView, LoadingView};
pub use layout::Layout;
pub use navbar::Navbar;
