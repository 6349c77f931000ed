//! Checkout snapshot semantics: orders capture prices at purchase time,
//! tolerate missing products, and generate well-formed order codes.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use chrono::Utc;
use rust_decimal::Decimal;

use nuru_api::models::{Order, OrderItem};
use nuru_api::services::checkout::{order_code, snapshot_lines};
use nuru_core::{OrderId, OrderStatus, PaymentStatus, ProductId, UserId};
use nuru_integration_tests::fixtures;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn test_snapshot_survives_catalog_price_change() {
    let mut catalog = vec![fixtures::product(1, "Complexion Clarifying Mask", "25.75")];
    let lines = vec![fixtures::cart_line(1, 2)];

    let snapshot = snapshot_lines(&lines, &catalog);
    assert_eq!(snapshot.total_usd, dec("51.50"));

    // The admin doubles the price after checkout; the snapshot must not move.
    catalog[0].base_price_usd = dec("51.50");
    assert_eq!(snapshot.items[0].unit_price_usd, dec("25.75"));
    assert_eq!(snapshot.items[0].line_total_usd, dec("51.50"));
}

#[test]
fn test_snapshot_skips_deleted_products_without_failing() {
    let catalog = vec![
        fixtures::product(1, "Hydrating Rose Toner", "18.50"),
        fixtures::product(2, "Shea Butter Body Cream", "15.25"),
    ];
    // Product 9 was deleted between cart-add and checkout.
    let lines = vec![
        fixtures::cart_line(1, 1),
        fixtures::cart_line(9, 4),
        fixtures::cart_line(2, 1),
    ];

    let snapshot = snapshot_lines(&lines, &catalog);

    assert_eq!(snapshot.skipped, vec![ProductId::new(9)]);
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.total_usd, dec("33.75"));
}

#[test]
fn test_order_json_shape() {
    let catalog = vec![fixtures::product(1, "Gentle Foaming Cleanser", "12.99")];
    let lines = vec![fixtures::cart_line(1, 3)];
    let snapshot = snapshot_lines(&lines, &catalog);

    let order = Order {
        id: OrderId::new(10),
        code: "0F3A9C21".to_string(),
        user_id: UserId::new(1),
        items: snapshot.items,
        total_usd: snapshot.total_usd,
        shipping_address: serde_json::json!({
            "line1": "Kimathi Street 12",
            "city": "Nairobi",
            "country": "Kenya",
        }),
        payment_method: "mpesa".to_string(),
        payment_status: PaymentStatus::Pending,
        order_status: OrderStatus::Processing,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["code"], "0F3A9C21");
    assert_eq!(json["payment_status"], "pending");
    assert_eq!(json["order_status"], "processing");
    assert_eq!(json["total_usd"], "38.97");
    assert_eq!(json["items"][0]["product_name"], "Gentle Foaming Cleanser");
    assert_eq!(json["items"][0]["quantity"], 3);
    assert_eq!(json["shipping_address"]["city"], "Nairobi");
}

#[test]
fn test_order_items_roundtrip_through_json_storage() {
    // Order items live as JSONB; what goes in must come back out.
    let item = OrderItem {
        product_id: ProductId::new(5),
        product_name: "Baobab Night Repair Oil".to_string(),
        quantity: 1,
        unit_price_usd: dec("34.00"),
        line_total_usd: dec("34.00"),
    };

    let stored = serde_json::to_string(&vec![item.clone()]).unwrap();
    let loaded: Vec<OrderItem> = serde_json::from_str(&stored).unwrap();
    assert_eq!(loaded, vec![item]);
}

#[test]
fn test_order_codes_are_short_uppercase_and_distinct() {
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let code = order_code();
        assert_eq!(code.len(), 8);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
            "unexpected character in {code}"
        );
        seen.insert(code);
    }
    // Collisions in 100 draws from a 16^8 space would indicate a broken generator.
    assert_eq!(seen.len(), 100);
}
