//! Shared type definitions.

pub mod currency;
pub mod email;
pub mod id;
pub mod status;

pub use currency::Currency;
pub use email::{Email, EmailError};
pub use id::{OrderId, ProductId, PromotionId, ReviewId, ShippingZoneId, TicketId, UserId};
pub use status::{
    OrderStatus, PaymentStatus, PromotionKind, PromotionStatus, ReviewStatus, TicketPriority,
    TicketStatus, UserRole,
};
