//! Payment method listing.

use axum::{Json, extract::Path};

use crate::services::payment_methods::{self, PaymentMethod};

/// `GET /payment-methods/{country}` - methods offered in a country.
pub async fn for_country(Path(country): Path<String>) -> Json<&'static [PaymentMethod]> {
    Json(payment_methods::for_country(&country))
}
