//! Supported currencies and their display metadata.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of currencies the storefront can render totals in.
///
/// Each currency carries fixed display metadata: an ISO-4217-style code,
/// a display symbol, and the country it is associated with. Exchange rates
/// live in the pricing engine, not here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Currency {
    /// Kenyan Shilling.
    #[default]
    KES,
    /// Ugandan Shilling.
    UGX,
    /// Burundi Franc.
    BIF,
    /// Congolese Franc.
    CDF,
}

impl Currency {
    /// All supported currencies, in stable display order.
    pub const ALL: [Self; 4] = [Self::KES, Self::UGX, Self::BIF, Self::CDF];

    /// Currency code (e.g. "KES").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::KES => "KES",
            Self::UGX => "UGX",
            Self::BIF => "BIF",
            Self::CDF => "CDF",
        }
    }

    /// Display symbol (e.g. "KSh").
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::KES => "KSh",
            Self::UGX => "USh",
            Self::BIF => "FBu",
            Self::CDF => "FC",
        }
    }

    /// Country associated with the currency.
    #[must_use]
    pub const fn country(self) -> &'static str {
        match self {
            Self::KES => "Kenya",
            Self::UGX => "Uganda",
            Self::BIF => "Burundi",
            Self::CDF => "DRC Congo",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KES" => Ok(Self::KES),
            "UGX" => Ok(Self::UGX),
            "BIF" => Ok(Self::BIF),
            "CDF" => Ok(Self::CDF),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

// SQLx support (with postgres feature): stored as TEXT.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Currency {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Currency {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(s.parse::<Self>()?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Currency {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.code(), buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_fixed_per_currency() {
        assert_eq!(Currency::KES.symbol(), "KSh");
        assert_eq!(Currency::KES.country(), "Kenya");
        assert_eq!(Currency::UGX.symbol(), "USh");
        assert_eq!(Currency::UGX.country(), "Uganda");
        assert_eq!(Currency::BIF.symbol(), "FBu");
        assert_eq!(Currency::BIF.country(), "Burundi");
        assert_eq!(Currency::CDF.symbol(), "FC");
        assert_eq!(Currency::CDF.country(), "DRC Congo");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
        assert!("USD".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Currency::BIF).unwrap();
        assert_eq!(json, "\"BIF\"");
        let parsed: Currency = serde_json::from_str("\"CDF\"").unwrap();
        assert_eq!(parsed, Currency::CDF);
    }

    #[test]
    fn test_default_is_kes() {
        assert_eq!(Currency::default(), Currency::KES);
    }
}
