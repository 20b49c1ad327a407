use leptos::prelude::*;
use shared_types::RoomType;
use thaw::*;

use crate::booking::format_usd;
use crate::components::{BookingController, ErrorView, LoadingView};
use crate::server::fetch_suites;

#[component]
fn SuiteCard(suite: RoomType, booking: Option<BookingController>) -> impl IntoView {
    let name = suite.name.clone();
    let book = move |_| {
        if let Some(booking) = booking {
            booking.open(Some(name.clone()));
        }
    };

    view! {
        <article class="suite-card">
            <img class="suite-card__image" src=suite.image alt=suite.name.clone() />
            <div class="suite-card__body">
                <div class="suite-card__header">
                    <h3>{suite.name.clone()}</h3>
                    <span class="suite-card__size">{suite.size}</span>
                </div>
                <p class="suite-card__rate">
                    {format_usd(u64::from(suite.price))}
                    <span class="suite-card__unit">"/night"</span>
                </p>
                <p class="suite-card__description">{suite.description}</p>
                <ul class="suite-card__amenities">
                    {suite.amenities
                        .into_iter()
                        .map(|amenity| view! { <li>{amenity}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <Button appearance=ButtonAppearance::Primary on_click=book>
                    "Book This Suite"
                </Button>
            </div>
        </article>
    }
}

#[component]
pub fn SuitesPage() -> impl IntoView {
    let booking = use_context::<BookingController>();
    let suites = Resource::new(|| (), |_| async move { fetch_suites().await });

    view! {
        <section class="suites-hero">
            <span class="suites-hero__eyebrow">"Luxury in the Highlands"</span>
            <h1>"Our Suites"</h1>
        </section>

        <section class="suites-list">
            <Suspense fallback=move || view! { <LoadingView message="Loading suites..."/> }>
                {move || {
                    suites.get().map(|result| match result {
                        Ok(list) => view! {
                            <div class="suite-cards">
                                {list
                                    .into_iter()
                                    .map(|suite| view! { <SuiteCard suite=suite booking=booking/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }.into_any(),
                        Err(e) => {
                            leptos::logging::error!("Failed to fetch suites: {}", e);
                            view! {
                                <ErrorView message=format!("Unable to load suites: {}", e)/>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
