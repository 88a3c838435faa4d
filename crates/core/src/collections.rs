//! Canonical collection names.
//!
//! Every handler addresses the document store through these constants so a
//! collection is never named twice in two spellings.

pub const MANAGEMENT: &str = "management";
pub const ITEM: &str = "item";
pub const SUPPLIER: &str = "supplier";
pub const REVIEW: &str = "review";
pub const USER: &str = "user";
pub const PROFILE: &str = "profile";
pub const ORDERS: &str = "orders";
pub const PAYMENTS: &str = "payments";
