use leptos::prelude::*;
use leptos::server;
use shared_types::RoomType;

#[server]
pub async fn fetch_suites() -> Result<Vec<RoomType>, ServerFnError> {
    let suites = crate::catalog::suites();
    tracing::debug!(count = suites.len(), "serving suite catalog");
    Ok(suites)
}
