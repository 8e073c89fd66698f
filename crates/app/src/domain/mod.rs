//! Storefront Domain Concerns

pub mod categories;
pub mod products;
pub mod users;
pub mod validation;
