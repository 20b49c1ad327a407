use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;
use thaw::*;

use crate::booking::selection::WEEKDAY_LABELS;
use crate::booking::{click_day, day_state, DayState, MonthView};

/// Cells for the displayed month. Empty until the browser has supplied
/// today's date, so server-rendered markup never depends on the server clock.
fn grid_cells(
    today: Option<NaiveDate>,
    month: Option<MonthView>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Option<(NaiveDate, DayState)>> {
    let (Some(today), Some(month)) = (today, month) else {
        return Vec::new();
    };

    month
        .cells()
        .into_iter()
        .map(|cell| cell.map(|date| (date, day_state(date, today, start, end))))
        .collect()
}

/// Month grid that turns day clicks into a proposed `(start, end)` pair.
///
/// The selected dates belong to the caller; this component only keeps track
/// of which month is on screen.
#[component]
pub fn DateRangePicker(
    #[prop(into)] start_date: Signal<Option<NaiveDate>>,
    #[prop(into)] end_date: Signal<Option<NaiveDate>>,
    on_range_select: impl Fn(Option<NaiveDate>, Option<NaiveDate>) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let today = RwSignal::new(None::<NaiveDate>);
    let displayed_month = RwSignal::new(None::<MonthView>);

    // Effects only run in the browser, after mount.
    Effect::new(move |_| {
        let now = Local::now().date_naive();
        today.set(Some(now));
        displayed_month.set(Some(MonthView::containing(now)));
    });

    let handle_day_click = move |day: NaiveDate| {
        let Some(today) = today.get_untracked() else {
            return;
        };
        let start = start_date.get_untracked();
        let end = end_date.get_untracked();
        if let Some((new_start, new_end)) = click_day(today, start, end, day) {
            on_range_select(new_start, new_end);
        }
    };

    let navigate = move |forward: bool| {
        displayed_month.update(|month| {
            if let Some(m) = month {
                *m = if forward { m.next() } else { m.previous() };
            }
        });
    };

    view! {
        <div class="date-range-picker">
            <div class="date-picker-header">
                <h3 class="month-label">
                    {move || displayed_month.get().map(|m| m.title()).unwrap_or_default()}
                </h3>
                <div class="month-nav">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| navigate(false)
                    >
                        "←"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| navigate(true)
                    >
                        "→"
                    </Button>
                </div>
            </div>

            <div class="weekday-headers">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="weekday-header">{*label}</div> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="calendar-days">
                {move || {
                    grid_cells(today.get(), displayed_month.get(), start_date.get(), end_date.get())
                        .into_iter()
                        .map(|cell| {
                            if let Some((date, state)) = cell {
                                view! {
                                    <button
                                        type="button"
                                        class=state.class()
                                        disabled=state.disabled
                                        on:click=move |_| {
                                            if !state.disabled {
                                                handle_day_click(date);
                                            }
                                        }
                                    >
                                        {date.day()}
                                        {state.shows_today_marker().then(|| view! {
                                            <span class="today-marker"></span>
                                        })}
                                    </button>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="calendar-day empty"></div>
                                }.into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
