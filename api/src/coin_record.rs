//! Defines the market-data record returned by the backend for one coin.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One cryptocurrency's market snapshot, as returned by `GET /crypto/{id}`.
///
/// A record is treated as an immutable value once received. Records kept in
/// the watch-list or compare set are point-in-time snapshots and never
/// refresh on their own.
///
/// The backend passes market stats through from its upstream source, which
/// sends `null` for stats it does not track for a coin. Those arrive as
/// `None` and render as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub ath: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ath_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub atl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atl_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    pub last_updated: DateTime<Utc>,
}

impl CoinRecord {
    /// Case-insensitive name comparison, used for watch-list membership.
    pub fn same_name_ignoring_case(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// The identifier to search for when this record is re-activated.
    pub fn lookup_id(&self) -> String {
        self.name.to_lowercase()
    }

    /// Max supply, if the coin has a meaningful cap.
    ///
    /// The backend sends `null` for uncapped coins and occasionally `0`;
    /// both mean "no cap to show".
    pub fn capped_supply(&self) -> Option<f64> {
        self.max_supply.filter(|supply| *supply != 0.0)
    }
}

/// The body of a backend reply.
///
/// The backend signals failure with an object carrying an `error` string,
/// regardless of the HTTP status, so that variant is tried first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoinLookup {
    Failed { error: String },
    Found(Box<CoinRecord>),
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(name: &str, price: f64) -> CoinRecord {
        CoinRecord {
            name: name.to_string(),
            symbol: name.chars().take(3).collect::<String>().to_uppercase(),
            current_price: Some(price),
            price_change_percentage_24h: Some(2.5),
            market_cap: Some(950_000_000_000.0),
            volume: Some(35_000_000_000.0),
            high_24h: Some(price * 1.02),
            low_24h: Some(price * 0.97),
            ath: Some(price * 1.4),
            ath_date: None,
            atl: Some(67.81),
            atl_date: None,
            circulating_supply: Some(19_600_000.0),
            max_supply: Some(21_000_000.0),
            last_updated: "2024-03-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn parses_backend_record() {
        let json = r#"{
            "name": "Bitcoin",
            "symbol": "BTC",
            "current_price": 50000,
            "price_change_percentage_24h": 2.5,
            "market_cap": 980000000000,
            "volume": 31000000000,
            "high_24h": 51000.5,
            "low_24h": 49000,
            "ath": 73738,
            "ath_date": "2024-03-14T07:10:36.635Z",
            "atl": 67.81,
            "atl_date": "2013-07-06T00:00:00.000Z",
            "circulating_supply": 19650000,
            "max_supply": 21000000,
            "last_updated": "2024-05-01T10:15:00.000Z"
        }"#;

        match serde_json::from_str::<CoinLookup>(json).unwrap() {
            CoinLookup::Found(record) => {
                assert_eq!(record.name, "Bitcoin");
                assert_eq!(record.current_price, Some(50000.0));
                assert_eq!(record.max_supply, Some(21_000_000.0));
                assert!(record.ath_date.is_some());
            }
            other => panic!("expected a record, got {other:?}"),
        }
    }

    #[test]
    fn parses_error_reply() {
        let lookup: CoinLookup = serde_json::from_str(r#"{"error": "coin not found"}"#).unwrap();
        assert_eq!(
            lookup,
            CoinLookup::Failed {
                error: "coin not found".to_string()
            }
        );
    }

    #[test]
    fn null_max_supply_is_absent() {
        let mut value = serde_json::to_value(record("Ethereum", 3000.0)).unwrap();
        value["max_supply"] = serde_json::Value::Null;
        let parsed: CoinRecord = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.max_supply, None);
        assert_eq!(parsed.capped_supply(), None);
    }

    #[test]
    fn null_stats_still_parse_as_a_record() {
        let json = r#"{
            "name": "Pi Network",
            "symbol": "pi",
            "current_price": 0.61,
            "price_change_percentage_24h": null,
            "market_cap": 4300000000,
            "volume": null,
            "high_24h": null,
            "low_24h": null,
            "ath": 2.98,
            "atl": 0.4,
            "circulating_supply": 7000000000,
            "max_supply": null,
            "last_updated": "2025-05-01T10:15:00.000Z"
        }"#;

        match serde_json::from_str::<CoinLookup>(json).unwrap() {
            CoinLookup::Found(record) => {
                assert_eq!(record.name, "Pi Network");
                assert_eq!(record.current_price, Some(0.61));
                assert_eq!(record.price_change_percentage_24h, None);
                assert_eq!(record.volume, None);
                assert_eq!(record.high_24h, None);
                assert_eq!(record.market_cap, Some(4_300_000_000.0));
            }
            other => panic!("expected a record, got {other:?}"),
        }
    }

    #[test]
    fn zero_max_supply_is_not_shown() {
        let mut coin = record("Tether", 1.0);
        coin.max_supply = Some(0.0);
        assert_eq!(coin.capped_supply(), None);
    }

    #[test]
    fn incomplete_record_does_not_parse() {
        assert!(serde_json::from_str::<CoinLookup>(r#"{"name": "Bitcoin"}"#).is_err());
    }

    #[test]
    fn name_comparison_ignores_case() {
        let coin = record("Bitcoin", 1.0);
        assert!(coin.same_name_ignoring_case("BITCOIN"));
        assert!(!coin.same_name_ignoring_case("bitcoin cash"));
        assert_eq!(coin.lookup_id(), "bitcoin");
    }
}
