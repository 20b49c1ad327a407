use serde::{Deserialize, Serialize};

/// A bookable suite as published by the hotel catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    /// Nightly rate in whole dollars.
    pub price: u32,
    pub description: String,
    pub image: String,
    pub amenities: Vec<String>,
    pub size: String,
}
