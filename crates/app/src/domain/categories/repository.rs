//! Categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    categories::{
        data::NewCategory,
        records::{CategoryRecord, CategoryUuid},
    },
    products::records::ProductUuid,
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const GET_CATEGORIES_SQL: &str = include_str!("sql/get_categories.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const ADD_CATEGORY_PRODUCT_SQL: &str = include_str!("sql/add_category_product.sql");
const REMOVE_CATEGORY_PRODUCT_SQL: &str = include_str!("sql/remove_category_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<Option<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(GET_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        categories: &[CategoryUuid],
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = categories.iter().copied().map(Uuid::from).collect();

        query_as::<Postgres, CategoryRecord>(GET_CATEGORIES_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CategoryUuid,
        category: NewCategory,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(CREATE_CATEGORY_SQL)
            .bind(uuid.into_uuid())
            .bind(category.name)
            .fetch_one(&mut **tx)
            .await
    }

    /// Add `product` to the category's product set unless it is already there.
    ///
    /// Returns `false` when nothing changed: either the category does not exist
    /// or it already lists the product.
    pub(crate) async fn add_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
        product: ProductUuid,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = query(ADD_CATEGORY_PRODUCT_SQL)
            .bind(category.into_uuid())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Remove `product` from the category's product set.
    pub(crate) async fn remove_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
        product: ProductUuid,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = query(REMOVE_CATEGORY_PRODUCT_SQL)
            .bind(category.into_uuid())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let products: Vec<Uuid> = row.try_get("products")?;

        Ok(Self {
            uuid: CategoryUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            products: products.into_iter().map(ProductUuid::from_uuid).collect(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
