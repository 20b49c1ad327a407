use chrono::{Datelike, Months, NaiveDate};

/// Range proposed to the owner of the picker: `(start, end)`.
pub type RangeProposal = (Option<NaiveDate>, Option<NaiveDate>);

/// Applies one day-cell click to the current selection.
///
/// A fresh selection starts when nothing is pending or a full range already
/// exists. With only a start set, an earlier day restarts from that day, the
/// same day cancels, and a later day completes the range.
pub fn next_selection(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    clicked: NaiveDate,
) -> RangeProposal {
    match (start, end) {
        (Some(start), None) => {
            if clicked < start {
                (Some(clicked), None)
            } else if clicked == start {
                (None, None)
            } else {
                (Some(start), Some(clicked))
            }
        }
        _ => (Some(clicked), None),
    }
}

/// Like [`next_selection`], but days before `today` are inert and produce no
/// proposal at all.
pub fn click_day(
    today: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    clicked: NaiveDate,
) -> Option<RangeProposal> {
    if clicked < today {
        return None;
    }
    Some(next_selection(start, end, clicked))
}

/// How a single day cell should render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayState {
    pub disabled: bool,
    pub selected: bool,
    pub in_range: bool,
    pub today: bool,
}

impl DayState {
    pub fn class(&self) -> String {
        let mut classes = vec!["calendar-day"];
        if self.disabled {
            classes.push("past");
        }
        if self.in_range {
            classes.push("in-range");
        }
        if self.selected {
            classes.push("selected");
        }
        if self.today {
            classes.push("today");
        }
        classes.join(" ")
    }

    /// The today marker is hidden once the day itself is selected.
    pub fn shows_today_marker(&self) -> bool {
        self.today && !self.selected
    }
}

pub fn day_state(
    date: NaiveDate,
    today: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> DayState {
    let in_range = match (start, end) {
        (Some(start), Some(end)) => date > start && date < end,
        _ => false,
    };

    DayState {
        disabled: date < today,
        selected: start == Some(date) || end == Some(date),
        in_range,
        today: date == today,
    }
}

/// The calendar page currently shown by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            None => 31,
        }
    }

    /// Blank cells before day 1 in a Sunday-first week.
    pub fn leading_blanks(&self) -> usize {
        self.first.weekday().num_days_from_sunday() as usize
    }

    /// Grid cells in row-major order, seven per week, `None` for padding.
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        let mut cells = vec![None; self.leading_blanks()];
        cells.extend(
            self.first
                .iter_days()
                .take(self.days_in_month() as usize)
                .map(Some),
        );
        cells
    }

    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 3, 5)
    }

    #[test]
    fn test_past_day_click_is_ignored() {
        let start = Some(date(2026, 3, 10));
        assert_eq!(click_day(today(), None, None, date(2026, 3, 4)), None);
        assert_eq!(click_day(today(), start, None, date(2026, 2, 28)), None);
        assert_eq!(
            click_day(today(), start, Some(date(2026, 3, 12)), date(2025, 12, 31)),
            None
        );
    }

    #[test]
    fn test_today_is_clickable() {
        assert_eq!(
            click_day(today(), None, None, today()),
            Some((Some(today()), None))
        );
    }

    #[test]
    fn test_two_clicks_make_a_range() {
        let (start, end) = next_selection(None, None, date(2026, 3, 10));
        assert_eq!((start, end), (Some(date(2026, 3, 10)), None));

        let (start, end) = next_selection(start, end, date(2026, 3, 13));
        assert_eq!(start, Some(date(2026, 3, 10)));
        assert_eq!(end, Some(date(2026, 3, 13)));
    }

    #[test]
    fn test_same_day_twice_cancels() {
        let (start, end) = next_selection(None, None, date(2026, 3, 10));
        assert_eq!(next_selection(start, end, date(2026, 3, 10)), (None, None));
    }

    #[test]
    fn test_earlier_second_click_restarts() {
        let (start, end) = next_selection(None, None, date(2026, 3, 13));
        assert_eq!(
            next_selection(start, end, date(2026, 3, 10)),
            (Some(date(2026, 3, 10)), None)
        );
    }

    #[test]
    fn test_click_after_full_range_starts_over() {
        let start = Some(date(2026, 3, 10));
        let end = Some(date(2026, 3, 13));

        for clicked in [date(2026, 3, 8), date(2026, 3, 11), date(2026, 3, 13), date(2026, 4, 2)] {
            assert_eq!(next_selection(start, end, clicked), (Some(clicked), None));
        }
    }

    #[test]
    fn test_day_state_rendering_rules() {
        let start = Some(date(2026, 3, 10));
        let end = Some(date(2026, 3, 13));

        let past = day_state(date(2026, 3, 4), today(), start, end);
        assert!(past.disabled);
        assert!(past.class().contains("past"));

        let now = day_state(today(), today(), start, end);
        assert!(now.today && !now.disabled && now.shows_today_marker());

        let edge = day_state(date(2026, 3, 10), today(), start, end);
        assert!(edge.selected && !edge.in_range);

        let inside = day_state(date(2026, 3, 11), today(), start, end);
        assert!(inside.in_range && !inside.selected);
        assert_eq!(inside.class(), "calendar-day in-range");

        let after = day_state(date(2026, 3, 13), today(), start, None);
        assert!(!after.selected && !after.in_range);
    }

    #[test]
    fn test_selected_today_hides_marker() {
        let state = day_state(today(), today(), Some(today()), None);
        assert!(state.selected);
        assert!(!state.shows_today_marker());
    }

    #[test]
    fn test_month_grid_padding() {
        // 1 March 2026 is a Sunday, 1 October 2026 a Thursday.
        let march = MonthView::containing(date(2026, 3, 17));
        assert_eq!(march.first_day(), date(2026, 3, 1));
        assert_eq!(march.leading_blanks(), 0);
        assert_eq!(march.cells().len(), 31);

        let october = MonthView::containing(date(2026, 10, 18));
        assert_eq!(october.leading_blanks(), 4);
        let cells = october.cells();
        assert_eq!(cells.len(), 4 + 31);
        assert_eq!(cells[4], Some(date(2026, 10, 1)));
        assert!(cells[..4].iter().all(Option::is_none));
    }

    #[test]
    fn test_days_in_february() {
        assert_eq!(MonthView::containing(date(2026, 2, 1)).days_in_month(), 28);
        assert_eq!(MonthView::containing(date(2028, 2, 1)).days_in_month(), 29);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let december = MonthView::containing(date(2026, 12, 25));
        let january = december.next();
        assert_eq!((january.year(), january.month()), (2027, 1));
        assert_eq!(january.previous(), december);
        assert_eq!(january.title(), "January 2027");
    }
}
