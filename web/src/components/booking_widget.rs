use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use super::{BookingController, DateRangePicker};
use crate::booking::{format_usd, BookingSession, BookingStep};

fn format_stay_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%a, %b %-d %Y").to_string())
        .unwrap_or_else(|| "Select a date".to_string())
}

fn format_nights(nights: u32) -> String {
    if nights == 1 {
        "1 Night".to_string()
    } else {
        format!("{} Nights", nights)
    }
}

#[component]
pub fn BookingWidget(controller: BookingController) -> impl IntoView {
    let session = controller.session();

    // Guest and card fields are not validated or sent anywhere.
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let card_number = RwSignal::new(String::new());
    let card_expiry = RwSignal::new(String::new());
    let card_cvv = RwSignal::new(String::new());

    let is_open = controller.is_open();
    // The step view is rebuilt only when the step changes, so picking dates
    // keeps the picker's displayed month.
    let step = Memo::new(move |_| session.with(BookingSession::step));
    let check_in = Signal::derive(move || session.with(|s| s.stay().check_in));
    let check_out = Signal::derive(move || session.with(|s| s.stay().check_out));
    let nights = Signal::derive(move || session.with(BookingSession::nights));
    let total = Signal::derive(move || session.with(BookingSession::total_price));
    let selected_suite = Signal::derive(move || session.with(|s| s.selected_suite().to_string()));
    let can_advance = Signal::derive(move || session.with(BookingSession::can_advance));

    let reset_form = move || {
        full_name.set(String::new());
        email.set(String::new());
        card_number.set(String::new());
        card_expiry.set(String::new());
        card_cvv.set(String::new());
    };

    let close_modal = move || {
        reset_form();
        controller.close();
    };

    let on_range_select = move |start: Option<NaiveDate>, end: Option<NaiveDate>| {
        session.update(|s| {
            if let Err(e) = s.apply_range(start, end) {
                leptos::logging::debug_warn!("Ignoring date selection: {}", e);
            }
        });
    };

    let submit_details = move || {
        session.update(|s| {
            if let Err(e) = s.submit_details() {
                leptos::logging::debug_warn!("Details not submitted: {}", e);
            }
        });
    };

    let submit_payment = move || {
        session.update(|s| {
            if let Err(e) = s.submit_payment() {
                leptos::logging::debug_warn!("Payment not submitted: {}", e);
            }
        });
    };

    let go_back = move || {
        session.update(|s| {
            if let Err(e) = s.back() {
                leptos::logging::debug_warn!("Cannot go back: {}", e);
            }
        });
    };

    let suite_options = move || {
        let current = selected_suite.get();
        let names: Vec<String> = session.with(|s| {
            let rates = s.rates();
            let mut names: Vec<String> = rates.suite_names().map(str::to_string).collect();
            if !rates.contains(&current) {
                names.insert(0, current.clone());
            }
            names
        });
        names
            .into_iter()
            .map(|name| {
                let is_selected = name == current;
                view! { <option value=name.clone() selected=is_selected>{name.clone()}</option> }
            })
            .collect::<Vec<_>>()
    };

    // Mounted only while open, so every open starts a fresh picker.
    view! {
        <Show when=move || is_open.get()>
            <div
                class="booking-modal-overlay"
                role="dialog"
                aria-modal="true"
                aria-labelledby="booking-modal-title"
            >
                <div class="booking-modal-scrim" on:click=move |_| close_modal()></div>

                <div class="booking-modal">
                    <div class="modal-header">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| close_modal()
                            class="close-button"
                        >
                            "×"
                        </Button>
                    </div>

                    <div class="booking-modal-body">
                        <aside class="reservation-summary">
                            <h3>"Your Reservation"</h3>
                            <div class="summary-row">
                                <span>"Stay Duration"</span>
                                <span class="summary-value">{move || format_nights(nights.get())}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Selected Suite"</span>
                                <span class="summary-value">{move || selected_suite.get()}</span>
                            </div>
                            <div class="summary-row summary-total">
                                <span>"Total Rate"</span>
                                <span class="summary-value">{move || format_usd(total.get())}</span>
                            </div>
                            <p class="summary-note">"SSL Encrypted Checkout"</p>
                        </aside>

                        <div class="modal-content">
                            {move || match step.get() {
                                BookingStep::CollectingDetails => view! {
                                    <form class="booking-form-content" on:submit=move |ev| {
                                        ev.prevent_default();
                                        submit_details();
                                    }>
                                        <div class="step-heading">
                                            <h2 id="booking-modal-title">"Reservation Details"</h2>
                                            <p class="step-label">
                                                {move || session.with(|s| s.step_label().unwrap_or_default())}
                                            </p>
                                        </div>

                                        <div class="form-row">
                                            <div class="form-group">
                                                <label for="guest-name">"Full Name"</label>
                                                <Input id="guest-name" placeholder="John Doe" value=full_name />
                                            </div>
                                            <div class="form-group">
                                                <label for="guest-email">"Email"</label>
                                                <Input
                                                    id="guest-email"
                                                    input_type=InputType::Email
                                                    placeholder="john@example.com"
                                                    value=email
                                                />
                                            </div>
                                        </div>

                                        <div class="form-group">
                                            <label>"Select Dates"</label>
                                            <DateRangePicker
                                                start_date=check_in
                                                end_date=check_out
                                                on_range_select=on_range_select
                                            />
                                        </div>

                                        <div class="form-row stay-readout">
                                            <div class="form-group">
                                                <span class="readout-label">"Check In"</span>
                                                <span class="readout-value">{move || format_stay_date(check_in.get())}</span>
                                            </div>
                                            <div class="form-group">
                                                <span class="readout-label">"Check Out"</span>
                                                <span class="readout-value">{move || format_stay_date(check_out.get())}</span>
                                            </div>
                                        </div>

                                        <div class="form-group">
                                            <label for="preferred-suite">"Preferred Suite"</label>
                                            <select
                                                id="preferred-suite"
                                                class="suite-select"
                                                on:change=move |ev| {
                                                    let suite = event_target_value(&ev);
                                                    session.update(|s| s.select_suite(suite));
                                                }
                                            >
                                                {suite_options}
                                            </select>
                                        </div>

                                        <Button
                                            button_type=ButtonType::Submit
                                            appearance=ButtonAppearance::Primary
                                            disabled=Signal::derive(move || !can_advance.get())
                                            class="advance-button"
                                        >
                                            "Continue to Payment"
                                        </Button>
                                    </form>
                                }.into_any(),
                                BookingStep::CollectingPayment => view! {
                                    <form class="booking-form-content" on:submit=move |ev| {
                                        ev.prevent_default();
                                        submit_payment();
                                    }>
                                        <div class="step-heading">
                                            <h2 id="booking-modal-title">"Secure Payment"</h2>
                                            <p class="step-label">
                                                {move || session.with(|s| s.step_label().unwrap_or_default())}
                                            </p>
                                        </div>

                                        <div class="card-notice">"All major cards accepted"</div>

                                        <div class="form-group">
                                            <label for="card-number">"Card Number"</label>
                                            <Input id="card-number" placeholder="XXXX XXXX XXXX XXXX" value=card_number />
                                        </div>
                                        <div class="form-row">
                                            <div class="form-group">
                                                <label for="card-expiry">"Expiry Date"</label>
                                                <Input id="card-expiry" placeholder="MM/YY" value=card_expiry />
                                            </div>
                                            <div class="form-group">
                                                <label for="card-cvv">"CVV"</label>
                                                <Input
                                                    id="card-cvv"
                                                    input_type=InputType::Password
                                                    placeholder="***"
                                                    value=card_cvv
                                                />
                                            </div>
                                        </div>

                                        <div class="form-actions">
                                            <Button
                                                button_type=ButtonType::Submit
                                                appearance=ButtonAppearance::Primary
                                            >
                                                "Pay & Complete Booking"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| go_back()
                                            >
                                                "Go Back to Details"
                                            </Button>
                                        </div>
                                    </form>
                                }.into_any(),
                                BookingStep::Completed => view! {
                                    <div class="confirmation-step">
                                        <div class="success-icon">"✓"</div>
                                        <h2 id="booking-modal-title">"Confirmed!"</h2>
                                        <p class="confirmation-text">
                                            "Your reservation at Canaan International is complete. A confirmation receipt has been sent to your email."
                                        </p>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| close_modal()
                                        >
                                            "Return to Site"
                                        </Button>
                                    </div>
                                }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nights() {
        assert_eq!(format_nights(0), "0 Nights");
        assert_eq!(format_nights(1), "1 Night");
        assert_eq!(format_nights(3), "3 Nights");
    }

    #[test]
    fn test_format_stay_date() {
        assert_eq!(format_stay_date(None), "Select a date");
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert_eq!(format_stay_date(Some(date)), "Tue, Mar 10 2026");
    }
}
