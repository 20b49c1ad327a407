use leptos::prelude::*;

use super::{BookingController, BookingWidget, Navbar};
use crate::booking::RateTable;
use crate::server::fetch_suites;

/// Page chrome shared by every route. Owns the one reservation dialog.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let booking = BookingController::new();
    provide_context(booking);

    // Price against the published catalog once it arrives; until then the
    // built-in rates apply.
    let catalog = Resource::new(|| (), |_| async move { fetch_suites().await });
    Effect::new(move |_| match catalog.get() {
        Some(Ok(suites)) => booking.set_rates(RateTable::from_catalog(&suites)),
        Some(Err(e)) => {
            leptos::logging::error!("Failed to fetch suite rates: {}", e);
        }
        None => {}
    });

    view! {
        <Navbar/>
        <main class="site-main">{children()}</main>
        <footer class="site-footer">
            <p class="site-footer__brand">"Canaan International"</p>
            <p class="site-footer__tagline">"Highland hospitality in Adigrat, Northern Ethiopia"</p>
        </footer>
        <BookingWidget controller=booking/>
    }
}
