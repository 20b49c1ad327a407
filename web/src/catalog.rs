use shared_types::RoomType;

fn suite(
    id: &str,
    name: &str,
    price: u32,
    description: &str,
    image: &str,
    amenities: &[&str],
    size: &str,
) -> RoomType {
    RoomType {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
        image: image.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        size: size.to_string(),
    }
}

/// The hotel's bookable suites, in display order.
pub fn suites() -> Vec<RoomType> {
    vec![
        suite(
            "royal-mesob",
            "The Royal Mesob Suite",
            450,
            "A masterpiece of architectural heritage. This split-level suite features a traditional circular layout inspired by the mesob, with private balconies overlooking the Adigrat mountain silhouette.",
            "https://images.unsplash.com/photo-1590490360182-c33d57733427?auto=format&fit=crop&q=80&w=1000",
            &["Private Balcony", "Butler Service", "Heritage Decor", "Mountain View"],
            "120 sqm",
        ),
        suite(
            "gheralta-deluxe",
            "Gheralta Vista Deluxe",
            280,
            "Modern comfort meets highland charm. Enjoy floor-to-ceiling windows oriented toward the distant Gheralta peaks, bringing Tigray's dramatic light inside.",
            "https://images.unsplash.com/photo-1618773928121-c32242e63f39?auto=format&fit=crop&q=80&w=1000",
            &["King Size Bed", "Rain Shower", "High-speed Wifi", "Panoramic View"],
            "45 sqm",
        ),
        suite(
            "adigrat-executive",
            "Adigrat Executive",
            350,
            "Tailored for the modern business traveler in Northern Ethiopia. A sophisticated space with integrated technology and views of the bustling Adigrat trade corridor.",
            "https://images.unsplash.com/photo-1591088398332-8a77d399a80c?auto=format&fit=crop&q=80&w=1000",
            &["Fiber Wifi", "Express Check-in", "Lounge Access", "Climate Control"],
            "65 sqm",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_ids_are_unique() {
        let suites = suites();
        let mut ids: Vec<_> = suites.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), suites.len());
    }
}
