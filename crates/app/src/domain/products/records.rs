//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::categories::records::{CategoryRecord, CategoryUuid},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub category_uuid: CategoryUuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A product together with its category, when the category was resolved.
///
/// `category` is `None` when expansion was not requested or the referenced
/// category no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithCategory {
    pub product: ProductRecord,
    pub category: Option<CategoryRecord>,
}
