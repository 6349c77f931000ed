//! End-to-end pricing scenarios: catalog price maps and cart totals must
//! agree with the engine's conversion for every supported currency.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use nuru_api::services::cart::build_cart_view;
use nuru_core::{Currency, PricingEngine, round_money};
use nuru_integration_tests::fixtures;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn test_catalog_price_map_agrees_with_localize() {
    let engine = PricingEngine::default();
    let product = fixtures::product(1, "Radiance Vitamin C Serum", "29.99");

    for currency in Currency::ALL {
        let entry = product.prices.get(&currency).unwrap();
        let localized = engine.localize(product.base_price_usd, currency);
        assert_eq!(entry.amount, localized.local, "{currency} diverged");
        assert_eq!(entry.symbol, localized.symbol);
    }
}

#[test]
fn test_cart_total_renders_in_each_preferred_currency() {
    let engine = PricingEngine::default();
    let catalog = vec![
        fixtures::product(1, "Hydrating Rose Toner", "18.50"),
        fixtures::product(2, "Gentle Foaming Cleanser", "12.99"),
    ];
    let lines = vec![fixtures::cart_line(1, 1), fixtures::cart_line(2, 2)];
    let total_usd = dec("18.50") + dec("12.99") * Decimal::from(2);

    for currency in Currency::ALL {
        let user = fixtures::customer(currency);
        let view = build_cart_view(&lines, &catalog, &user, &engine);

        assert_eq!(view.total.usd, total_usd);
        assert_eq!(
            view.total.local.local,
            round_money(total_usd * engine.rate_for(currency))
        );
        assert_eq!(view.total.local.currency, currency);
        assert_eq!(view.total.local.symbol, currency.symbol());
    }
}

#[test]
fn test_known_receipt_amounts() {
    // A 25 USD cart is KSh 3212.50, USh 89558.50, FBu 71250.00, FC 67500.00.
    let engine = PricingEngine::default();
    let expected = [
        (Currency::KES, "3212.50"),
        (Currency::UGX, "89558.50"),
        (Currency::BIF, "71250.00"),
        (Currency::CDF, "67500.00"),
    ];

    for (currency, amount) in expected {
        assert_eq!(engine.localize(dec("25.00"), currency).local, dec(amount));
    }
}

#[test]
fn test_product_json_exposes_string_decimals_and_price_map() {
    let product = fixtures::product(3, "Baobab Night Repair Oil", "34.00");
    let json = serde_json::to_value(&product).unwrap();

    // Decimals serialize as strings so clients never touch binary floats.
    assert_eq!(json["base_price_usd"], "34.00");
    assert_eq!(json["prices"]["KES"]["country"], "Kenya");
    assert_eq!(json["prices"]["CDF"]["symbol"], "FC");
}
