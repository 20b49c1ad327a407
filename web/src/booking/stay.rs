use chrono::NaiveDate;

/// The guest's chosen check-in/check-out pair, at whole-day granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StayWindow {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl StayWindow {
    pub fn new(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.check_in.is_none() && self.check_out.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Number of nights between the two dates, `0` unless both are set.
    ///
    /// Uses the absolute day difference so an inverted or same-day window
    /// still yields a sensible count.
    pub fn nights(&self) -> u32 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                let days = (check_out - check_in).num_days().unsigned_abs();
                u32::try_from(days).unwrap_or(u32::MAX)
            }
            _ => 0,
        }
    }

    pub fn clear(&mut self) {
        self.check_in = None;
        self.check_out = None;
    }
}
