//! Product listing options and page metadata.

use crate::domain::{
    products::records::ProductWithCategory,
    validation::{ValidationError, ValidationReason},
};

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 10;

/// Sortable product columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Name,
    Price,
}

impl SortField {
    const NAMES: &'static [&'static str] = &["createdAt", "updatedAt", "name", "price"];

    fn parse(value: &str) -> Option<Self> {
        match value {
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    /// Column this field sorts on.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Name => "name",
            Self::Price => "price",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` sorts ascending.
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Options for listing products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProducts {
    pub page: u32,
    pub limit: u32,
    pub sort: SortField,
    pub order: SortOrder,
    pub expand: bool,
}

impl Default for ListProducts {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: SortField::default(),
            order: SortOrder::default(),
            expand: false,
        }
    }
}

impl ListProducts {
    /// Build listing options from raw `_page`, `_limit`, `_sort` and `_order`
    /// query values; absent values take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive page or limit, or an
    /// unknown sort field.
    pub fn from_query(
        page: Option<&str>,
        limit: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
        expand: bool,
    ) -> Result<Self, ValidationError> {
        let sort = sort
            .map(|value| {
                SortField::parse(value).ok_or_else(|| {
                    ValidationError::new("_sort", ValidationReason::NotOneOf(SortField::NAMES))
                })
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            page: positive("_page", page)?.unwrap_or(DEFAULT_PAGE),
            limit: positive("_limit", limit)?.unwrap_or(DEFAULT_LIMIT),
            sort,
            order: order.map(SortOrder::parse).unwrap_or_default(),
            expand,
        })
    }

    /// Rows to skip before this page starts.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

fn positive(field: &str, value: Option<&str>) -> Result<Option<u32>, ValidationError> {
    value
        .map(|value| match value.trim().parse::<u32>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ValidationError::new(
                field,
                ValidationReason::NotAPositiveInteger,
            )),
        })
        .transpose()
}

/// Page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
}

impl Pagination {
    #[must_use]
    pub fn new(options: &ListProducts, total_items: u64) -> Self {
        Self {
            current_page: options.page,
            total_pages: total_items.div_ceil(u64::from(options.limit.max(1))),
            total_items,
        }
    }
}

/// One page of products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub items: Vec<ProductWithCategory>,
    pub pagination: Pagination,
}
