use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use super::BookingController;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let booking = use_context::<BookingController>();

    view! {
        <nav class="navbar" aria-label="Main navigation">
            <div class="navbar__container">
                <div class="navbar__brand" on:click=move |_| scroll_to_top()>
                    <A href="/" attr:class="navbar__logo">
                        "Canaan International"
                    </A>
                </div>

                <div class="navbar__links" on:click=move |_| scroll_to_top()>
                    <A href="/" attr:class="navbar__link">
                        "Our Story"
                    </A>
                    <A href="/suites" attr:class="navbar__link">
                        "Suites"
                    </A>
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    class="navbar__cta"
                    on_click=move |_| {
                        if let Some(booking) = booking {
                            booking.open(None);
                        }
                    }
                >
                    "Book Now"
                </Button>
            </div>
        </nav>
    }
}
