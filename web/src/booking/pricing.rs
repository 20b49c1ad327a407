use shared_types::RoomType;

/// Nightly rate applied to any suite name the table does not know.
pub const DEFAULT_NIGHTLY_RATE: u32 = 450;

const DEFAULT_RATES: [(&str, u32); 3] = [
    ("The Royal Mesob Suite", 450),
    ("Gheralta Vista Deluxe", 280),
    ("Adigrat Executive", 350),
];

/// Suite name to nightly rate (whole dollars), in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: Vec<(String, u32)>,
    fallback: u32,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES
                .iter()
                .map(|(name, rate)| (name.to_string(), *rate))
                .collect(),
            fallback: DEFAULT_NIGHTLY_RATE,
        }
    }
}

impl RateTable {
    pub fn from_catalog(suites: &[RoomType]) -> Self {
        Self {
            rates: suites
                .iter()
                .map(|suite| (suite.name.clone(), suite.price))
                .collect(),
            fallback: DEFAULT_NIGHTLY_RATE,
        }
    }

    pub fn contains(&self, suite_name: &str) -> bool {
        self.rates.iter().any(|(name, _)| name == suite_name)
    }

    /// Rate for `suite_name`, or the fallback rate when the name is unknown.
    pub fn nightly_rate(&self, suite_name: &str) -> u32 {
        self.rates
            .iter()
            .find(|(name, _)| name == suite_name)
            .map(|(_, rate)| *rate)
            .unwrap_or(self.fallback)
    }

    pub fn suite_names(&self) -> impl Iterator<Item = &str> {
        self.rates.iter().map(|(name, _)| name.as_str())
    }
}

pub fn total_price(nights: u32, nightly_rate: u32) -> u64 {
    u64::from(nights) * u64::from(nightly_rate)
}

/// Renders a whole-dollar amount as `$1,350.00`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.00", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_suite_rates() {
        let table = RateTable::default();
        assert_eq!(table.nightly_rate("The Royal Mesob Suite"), 450);
        assert_eq!(table.nightly_rate("Gheralta Vista Deluxe"), 280);
        assert_eq!(table.nightly_rate("Adigrat Executive"), 350);
    }

    #[test]
    fn test_unknown_suite_falls_back() {
        let table = RateTable::default();
        assert!(!table.contains("Horizon Deluxe Suite"));
        assert_eq!(table.nightly_rate("Horizon Deluxe Suite"), DEFAULT_NIGHTLY_RATE);
        assert_eq!(table.nightly_rate(""), DEFAULT_NIGHTLY_RATE);
    }

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(3, 280), 840);
        assert_eq!(total_price(0, 450), 0);
        assert_eq!(total_price(u32::MAX, u32::MAX), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(840), "$840.00");
        assert_eq!(format_usd(1350), "$1,350.00");
        assert_eq!(format_usd(1_234_567), "$1,234,567.00");
    }

    #[test]
    fn test_catalog_matches_built_in_table() {
        let from_catalog = RateTable::from_catalog(&crate::catalog::suites());
        assert_eq!(from_catalog, RateTable::default());
        assert_eq!(
            from_catalog.suite_names().collect::<Vec<_>>(),
            vec!["The Royal Mesob Suite", "Gheralta Vista Deluxe", "Adigrat Executive"]
        );
    }
}
