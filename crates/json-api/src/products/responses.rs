//! Product Responses

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::{
    pagination::Pagination,
    records::{ProductRecord, ProductWithCategory},
};

use crate::categories::responses::CategoryResponse;

/// A product's category: the bare identifier, or the whole category when it
/// was expanded.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum CategoryRef {
    Expanded(CategoryResponse),
    Id(Uuid),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// The product name
    pub name: String,

    /// The product price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Image reference
    pub image: String,

    /// The product description
    pub desc: String,

    /// The product's category
    pub category_id: CategoryRef,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductWithCategory {
            product,
            category: None,
        }
        .into()
    }
}

impl From<ProductWithCategory> for ProductResponse {
    fn from(ProductWithCategory { product, category }: ProductWithCategory) -> Self {
        let category_id = match category {
            Some(category) => CategoryRef::Expanded(category.into()),
            None => CategoryRef::Id(product.category_uuid.into()),
        };

        ProductResponse {
            id: product.uuid.into(),
            name: product.name,
            price: product.price,
            image: product.image,
            desc: product.description,
            category_id,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginationResponse {
    /// The requested page
    pub current_page: u32,

    /// Number of pages at the requested page size
    pub total_pages: u64,

    /// Number of products in the catalog
    pub total_items: u64,
}

impl From<Pagination> for PaginationResponse {
    fn from(pagination: Pagination) -> Self {
        PaginationResponse {
            current_page: pagination.current_page,
            total_pages: pagination.total_pages,
            total_items: pagination.total_items,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Products on the requested page
    pub data: Vec<ProductResponse>,

    /// Page metadata
    pub pagination: PaginationResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductMessageResponse {
    /// Outcome of the request
    pub message: String,

    /// The stored product
    pub data: ProductResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    /// Outcome of the request
    pub message: String,

    /// The deleted product, or `null` when nothing matched
    pub product: Option<ProductResponse>,
}
