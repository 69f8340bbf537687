//! Autocomplete over a fixed table of popular coin identifiers.

/// Popular coin identifiers offered while typing.
pub const POPULAR_COINS: [&str; 30] = [
    "bitcoin",
    "ethereum",
    "tether",
    "binancecoin",
    "ripple",
    "cardano",
    "solana",
    "polkadot",
    "dogecoin",
    "avalanche",
    "chainlink",
    "litecoin",
    "uniswap",
    "stellar",
    "vechain",
    "filecoin",
    "tron",
    "cosmos",
    "ethereum-classic",
    "monero",
    "eos",
    "aave",
    "maker",
    "compound",
    "algorand",
    "tezos",
    "dash",
    "zcash",
    "decentraland",
    "fantom",
];

/// Maximum number of suggestions shown in the dropdown.
pub const MAX_SUGGESTIONS: usize = 8;

/// Returns the entries of `table` that contain `input`, ignoring case.
///
/// Table order is kept and the result is cut at [`MAX_SUGGESTIONS`]. A blank
/// box never shows suggestions.
pub fn suggestions<'a, S: AsRef<str>>(input: &str, table: &'a [S]) -> Vec<&'a str> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    table
        .iter()
        .map(|entry| -> &'a str { entry.as_ref() })
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_nothing() {
        assert!(suggestions("", &POPULAR_COINS).is_empty());
    }

    #[test]
    fn matches_ignore_case_and_keep_table_order() {
        assert_eq!(
            suggestions("ETH", &POPULAR_COINS),
            ["ethereum", "tether", "ethereum-classic"]
        );
        assert_eq!(suggestions("coin", &POPULAR_COINS)[..2], ["bitcoin", "binancecoin"]);
        assert_eq!(suggestions("Ethereum-", &POPULAR_COINS), ["ethereum-classic"]);
    }

    #[test]
    fn result_is_capped() {
        let hits = suggestions("a", &POPULAR_COINS);
        assert_eq!(hits.len(), MAX_SUGGESTIONS);
        assert!(hits.iter().all(|h| h.contains('a')));

        let positions: Vec<_> = hits
            .iter()
            .map(|h| POPULAR_COINS.iter().position(|p| p == h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn works_with_owned_tables() {
        let table = vec!["Alpha".to_string(), "beta".to_string()];
        assert_eq!(suggestions("ALP", &table), ["Alpha"]);
        assert!(suggestions("zz", &table).is_empty());
    }
}
