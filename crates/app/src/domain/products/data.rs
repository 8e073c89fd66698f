//! Products Data

use rust_decimal::Decimal;

use crate::domain::categories::records::CategoryUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub category_uuid: CategoryUuid,
}

/// Product Update Data
///
/// Each `Some` field replaces the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category_uuid: Option<CategoryUuid>,
}

impl ProductUpdate {
    /// True when the update would not change any field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
