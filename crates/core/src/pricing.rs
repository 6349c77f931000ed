//! Pure multi-currency pricing engine.
//!
//! Converts a base price in USD into per-currency amounts using a fixed
//! exchange-rate table. The table is injected at construction so it can be
//! swapped for tests or replaced by a live provider without touching call
//! sites; the [`Default`] table carries the storefront's fixed rates.
//!
//! Amounts are rounded to 2 decimal places using round-half-away-from-zero
//! (the "round half up" a shopper expects on a receipt). All arithmetic is
//! decimal; no floats are involved.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// Exchange rates, expressed as units of local currency per 1 USD.
///
/// Read-only after construction. The [`Default`] impl carries the fixed
/// rates the storefront launched with; a deployment wanting fresh rates
/// builds a new table and a new [`PricingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    kes: Decimal,
    ugx: Decimal,
    bif: Decimal,
    cdf: Decimal,
}

impl RateTable {
    /// Build a table from explicit per-currency rates.
    #[must_use]
    pub const fn new(kes: Decimal, ugx: Decimal, bif: Decimal, cdf: Decimal) -> Self {
        Self { kes, ugx, bif, cdf }
    }

    /// The exchange rate for one supported currency.
    #[must_use]
    pub const fn rate_for(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::KES => self.kes,
            Currency::UGX => self.ugx,
            Currency::BIF => self.bif,
            Currency::CDF => self.cdf,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            // 128.5
            kes: Decimal::new(1285, 1),
            // 3582.34
            ugx: Decimal::new(358_234, 2),
            // 2850.0
            bif: Decimal::new(2850, 0),
            // 2700.0
            cdf: Decimal::new(2700, 0),
        }
    }
}

/// One entry of a product's derived price map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPrice {
    /// Price in the local currency, rounded to 2 decimal places.
    pub amount: Decimal,
    /// Display symbol for the currency (e.g. "KSh").
    pub symbol: String,
    /// Country associated with the currency.
    pub country: String,
}

/// A USD total rendered in one local currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedTotal {
    /// Amount in the local currency, rounded to 2 decimal places.
    pub local: Decimal,
    /// The currency the amount is denominated in.
    pub currency: Currency,
    /// Display symbol for the currency.
    pub symbol: String,
}

/// Pure conversion from USD base prices to per-currency amounts.
///
/// Deterministic for a given rate table; no I/O, no side effects.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rates: RateTable,
}

impl PricingEngine {
    /// Create an engine over an injected rate table.
    #[must_use]
    pub const fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// The exchange rate used for a currency.
    #[must_use]
    pub const fn rate_for(&self, currency: Currency) -> Decimal {
        self.rates.rate_for(currency)
    }

    /// Derive the full price map for a USD base price.
    ///
    /// The result is a pure function of the base price and the rate table;
    /// it must be recomputed whenever the base price changes and never
    /// edited independently.
    #[must_use]
    pub fn price_map(&self, base_usd: Decimal) -> BTreeMap<Currency, CurrencyPrice> {
        Currency::ALL
            .into_iter()
            .map(|currency| {
                (
                    currency,
                    CurrencyPrice {
                        amount: round_money(base_usd * self.rates.rate_for(currency)),
                        symbol: currency.symbol().to_owned(),
                        country: currency.country().to_owned(),
                    },
                )
            })
            .collect()
    }

    /// Render a USD total in one local currency.
    #[must_use]
    pub fn localize(&self, total_usd: Decimal, currency: Currency) -> LocalizedTotal {
        LocalizedTotal {
            local: round_money(total_usd * self.rates.rate_for(currency)),
            currency,
            symbol: currency.symbol().to_owned(),
        }
    }
}

/// Round a monetary amount to 2 decimal places, half away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_price_map_matches_rate_times_base() {
        let engine = PricingEngine::default();
        for base in ["0", "0.01", "18.50", "29.99", "34.50", "100"] {
            let base = dec(base);
            let map = engine.price_map(base);
            for currency in Currency::ALL {
                let entry = map.get(&currency).unwrap();
                assert_eq!(entry.amount, round_money(base * engine.rate_for(currency)));
                // Metadata is fixed per currency, regardless of price.
                assert_eq!(entry.symbol, currency.symbol());
                assert_eq!(entry.country, currency.country());
            }
        }
    }

    #[test]
    fn test_known_amounts() {
        let engine = PricingEngine::default();
        let map = engine.price_map(dec("29.99"));
        // 29.99 * 128.5 = 3853.715 -> 3853.72 (half away from zero)
        assert_eq!(map.get(&Currency::KES).unwrap().amount, dec("3853.72"));
        // 29.99 * 3582.34 = 107434.3766 -> 107434.38
        assert_eq!(map.get(&Currency::UGX).unwrap().amount, dec("107434.38"));
    }

    #[test]
    fn test_localize_kes_scenario() {
        // 25.00 USD at 128.5 KES/USD renders as 3212.50 KES.
        let engine = PricingEngine::default();
        let total = engine.localize(dec("25.00"), Currency::KES);
        assert_eq!(total.local, dec("3212.50"));
        assert_eq!(total.currency, Currency::KES);
        assert_eq!(total.symbol, "KSh");
    }

    #[test]
    fn test_zero_base_price() {
        let engine = PricingEngine::default();
        for (_, entry) in engine.price_map(Decimal::ZERO) {
            assert_eq!(entry.amount, Decimal::ZERO.round_dp(2));
        }
    }

    #[test]
    fn test_injected_rate_table() {
        let rates = RateTable::new(dec("2"), dec("3"), dec("4"), dec("5"));
        let engine = PricingEngine::new(rates);
        let map = engine.price_map(dec("10"));
        assert_eq!(map.get(&Currency::KES).unwrap().amount, dec("20.00"));
        assert_eq!(map.get(&Currency::CDF).unwrap().amount, dec("50.00"));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_money(dec("1.005")), dec("1.01"));
        assert_eq!(round_money(dec("1.004")), dec("1.00"));
        assert_eq!(round_money(dec("3853.715")), dec("3853.72"));
    }

    #[test]
    fn test_price_map_serializes_with_currency_keys() {
        let engine = PricingEngine::default();
        let map = engine.price_map(dec("1"));
        let json = serde_json::to_value(&map).unwrap();
        assert!(json.get("KES").is_some());
        assert!(json.get("UGX").is_some());
        assert!(json.get("BIF").is_some());
        assert!(json.get("CDF").is_some());
        assert_eq!(json["KES"]["symbol"], "KSh");
        assert_eq!(json["KES"]["country"], "Kenya");
    }
}
