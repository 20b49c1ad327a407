use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::components::BookingController;

#[component]
pub fn HomePage() -> impl IntoView {
    let booking = use_context::<BookingController>();
    let open_booking = move |_| {
        if let Some(booking) = booking {
            booking.open(None);
        }
    };

    view! {
        <section class="hero">
            <span class="hero__eyebrow">"Adigrat, Northern Ethiopia"</span>
            <h1 class="hero__title">"Canaan International"</h1>
            <p class="hero__lead">
                "A curated gateway to the spiritual and natural wonders of the Tigray highlands."
            </p>
            <div class="hero__actions">
                <Button appearance=ButtonAppearance::Primary on_click=open_booking>
                    "Reserve Your Stay"
                </Button>
                <A href="/suites" attr:class="hero__link">
                    "Explore Suites"
                </A>
            </div>
        </section>

        <section class="home-intro">
            <h2>"Highland Hospitality"</h2>
            <p>
                "Heritage architecture, mountain light and a table rooted in Canaanite tradition. "
                "Choose a suite, pick your dates, and we will have the mesob ready."
            </p>
        </section>
    }
}
