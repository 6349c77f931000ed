//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use nuru_core::{Currency, Email, UserId, UserRole};

/// A storefront user (domain type).
///
/// The password hash is deliberately not part of this type; repositories
/// return it separately to the auth service only.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique per user.
    pub email: Email,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Customer or admin.
    pub role: UserRole,
    /// Country used for payment-method selection.
    pub country: String,
    /// Currency used to render totals for this user.
    pub preferred_currency: Currency,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// Bumped on every cart mutation and profile change.
    pub updated_at: DateTime<Utc>,
}

/// Public profile shape returned by auth and admin endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub role: UserRole,
    pub country: String,
    pub preferred_currency: Currency,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            country: user.country.clone(),
            preferred_currency: user.preferred_currency,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_omits_sensitive_fields() {
        let user = User {
            id: UserId::new(1),
            name: "Wanjiru".to_string(),
            email: Email::parse("wanjiru@example.com").unwrap(),
            phone: None,
            role: UserRole::Customer,
            country: "Kenya".to_string(),
            preferred_currency: Currency::KES,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(UserProfile::from(&user)).unwrap();
        assert_eq!(json["email"], "wanjiru@example.com");
        assert_eq!(json["role"], "customer");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("updated_at").is_none());
    }
}
