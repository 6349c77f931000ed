//! Domain types and response shapes.

pub mod cart;
pub mod order;
pub mod product;
pub mod promotion;
pub mod review;
pub mod shipping_zone;
pub mod ticket;
pub mod user;

pub use cart::{CartItemView, CartLine, CartTotal, CartView};
pub use order::{Order, OrderItem};
pub use product::Product;
pub use promotion::{Promotion, PromotionRejection};
pub use review::Review;
pub use shipping_zone::ShippingZone;
pub use ticket::SupportTicket;
pub use user::{User, UserProfile};
