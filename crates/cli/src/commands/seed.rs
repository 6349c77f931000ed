//! Seed the catalog with the launch product line.
//!
//! Idempotent: does nothing if any products already exist, so it is safe to
//! run on every deploy.

use rust_decimal::Decimal;

use nuru_api::db::products::{NewProduct, ProductRepository};
use nuru_core::PricingEngine;

use super::CommandError;

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    base_price_usd: &'static str,
    image_url: &'static str,
}

const CATALOG: &[SeedProduct] = &[
    SeedProduct {
        name: "Radiance Vitamin C Serum",
        description: "Brightening serum with 15% vitamin C and baobab extract.",
        category: "Serum",
        base_price_usd: "29.99",
        image_url: "/images/vitamin-c-serum.jpg",
    },
    SeedProduct {
        name: "Hydrating Rose Toner",
        description: "Alcohol-free toner with rose water and hyaluronic acid.",
        category: "Toner",
        base_price_usd: "18.50",
        image_url: "/images/rose-toner.jpg",
    },
    SeedProduct {
        name: "Complexion Clarifying Mask",
        description: "Weekly clay mask with Kenyan volcanic ash and tea tree oil.",
        category: "Mask",
        base_price_usd: "25.75",
        image_url: "/images/clarifying-mask.jpg",
    },
    SeedProduct {
        name: "Shea Butter Body Cream",
        description: "Rich everyday moisturizer with unrefined East African shea.",
        category: "Moisturizer",
        base_price_usd: "15.25",
        image_url: "/images/shea-cream.jpg",
    },
    SeedProduct {
        name: "Gentle Foaming Cleanser",
        description: "Creamy low-pH cleanser for daily use on all skin types.",
        category: "Cleanser",
        base_price_usd: "12.99",
        image_url: "/images/foaming-cleanser.jpg",
    },
    SeedProduct {
        name: "Baobab Night Repair Oil",
        description: "Overnight facial oil with cold-pressed baobab and marula.",
        category: "Oil",
        base_price_usd: "34.00",
        image_url: "/images/night-repair-oil.jpg",
    },
];

/// Insert the launch catalog if the products table is empty.
///
/// # Errors
///
/// Returns `CommandError` if a seed price fails to parse or a query fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;
    let repo = ProductRepository::new(&pool);

    if !repo.list().await?.is_empty() {
        tracing::info!("Products already present, skipping seed");
        return Ok(());
    }

    let pricing = PricingEngine::default();

    for seed in CATALOG {
        let base_price_usd: Decimal = seed
            .base_price_usd
            .parse()
            .map_err(|_| {
                CommandError::InvalidSeed(format!("bad price for {}", seed.name))
            })?;

        let product = repo
            .create(NewProduct {
                name: seed.name,
                description: seed.description,
                category: seed.category,
                base_price_usd,
                prices: pricing.price_map(base_price_usd),
                in_stock: true,
                image_url: Some(seed.image_url),
            })
            .await?;

        tracing::info!(product_id = %product.id, name = %product.name, "Seeded product");
    }

    tracing::info!("Seed complete: {} products", CATALOG.len());

    Ok(())
}
