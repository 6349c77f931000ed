//! Payment method catalog.
//!
//! Methods are presentation-level only: checkout records the chosen method
//! as text and leaves the payment pending for manual confirmation. The
//! lists are keyed by the customer's country, mobile-money first.

use serde::Serialize;

/// A payment option offered at checkout.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub name: &'static str,
}

const KENYA: &[PaymentMethod] = &[
    PaymentMethod { id: "mpesa", name: "M-Pesa" },
    PaymentMethod { id: "airtel_money", name: "Airtel Money" },
    PaymentMethod { id: "card", name: "Credit / Debit Card" },
];

const UGANDA: &[PaymentMethod] = &[
    PaymentMethod { id: "mtn_momo", name: "MTN Mobile Money" },
    PaymentMethod { id: "airtel_money", name: "Airtel Money" },
    PaymentMethod { id: "card", name: "Credit / Debit Card" },
];

const BURUNDI: &[PaymentMethod] = &[
    PaymentMethod { id: "lumicash", name: "Lumicash" },
    PaymentMethod { id: "ecocash", name: "Ecocash" },
    PaymentMethod { id: "card", name: "Credit / Debit Card" },
];

const DR_CONGO: &[PaymentMethod] = &[
    PaymentMethod { id: "mpesa", name: "M-Pesa" },
    PaymentMethod { id: "orange_money", name: "Orange Money" },
    PaymentMethod { id: "airtel_money", name: "Airtel Money" },
    PaymentMethod { id: "card", name: "Credit / Debit Card" },
];

/// Payment methods offered in a country. Unknown countries get the Kenyan
/// list, which is the store default.
#[must_use]
pub fn for_country(country: &str) -> &'static [PaymentMethod] {
    if country.eq_ignore_ascii_case("Kenya") {
        KENYA
    } else if country.eq_ignore_ascii_case("Uganda") {
        UGANDA
    } else if country.eq_ignore_ascii_case("Burundi") {
        BURUNDI
    } else if country.eq_ignore_ascii_case("DRC Congo") {
        DR_CONGO
    } else {
        KENYA
    }
}

/// Whether `method` is offered in `country`.
#[must_use]
pub fn is_offered(method: &str, country: &str) -> bool {
    for_country(country).iter().any(|m| m.id == method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuru_core::Currency;

    #[test]
    fn test_every_country_offers_card() {
        for country in ["Kenya", "Uganda", "Burundi", "DRC Congo", "Elsewhere"] {
            assert!(is_offered("card", country), "{country} missing card");
        }
    }

    #[test]
    fn test_country_specific_methods() {
        assert!(is_offered("mpesa", "Kenya"));
        assert!(!is_offered("mpesa", "Uganda"));
        assert!(is_offered("mtn_momo", "uganda"));
        assert!(is_offered("lumicash", "Burundi"));
        assert!(is_offered("orange_money", "DRC Congo"));
    }

    #[test]
    fn test_currency_countries_resolve_to_their_own_tables() {
        // The keys here must stay in sync with Currency::country(), or a
        // whole country silently falls back to the Kenyan list.
        let flagship = [
            (Currency::KES, "mpesa"),
            (Currency::UGX, "mtn_momo"),
            (Currency::BIF, "lumicash"),
            (Currency::CDF, "orange_money"),
        ];

        for (currency, method) in flagship {
            let country = currency.country();
            assert!(
                is_offered(method, country),
                "{method} not offered in {country}"
            );
        }
    }
}
