//! Placeholder and failure states shown while page data is fetched.

use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent, Spinner, SpinnerSize};

#[component]
pub fn LoadingView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Preparing your stay...".to_string());

    view! {
        <div class="feedback feedback--loading">
            <Spinner size=SpinnerSize::Large />
            <p class="feedback__message">{message}</p>
        </div>
    }
}

#[component]
pub fn ErrorView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message =
        message.unwrap_or_else(|| "We could not reach the front desk. Please try again.".to_string());

    view! {
        <div class="feedback feedback--error">
            <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
        </div>
    }
}
