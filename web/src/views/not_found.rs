use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <div class="not-found__code">"404"</div>
            <h1>"This corridor leads nowhere"</h1>
            <p>"The page you were looking for is not part of Canaan International."</p>
            <A href="/" attr:class="not-found__home">
                "Return to the Lobby"
            </A>
        </section>
    }
}
