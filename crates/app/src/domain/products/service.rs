//! Products service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{
    database::Db,
    domain::{
        categories::{
            records::{CategoryRecord, CategoryUuid},
            repository::PgCategoriesRepository,
        },
        products::{
            data::{NewProduct, ProductUpdate},
            errors::ProductsServiceError,
            pagination::{ListProducts, Pagination, ProductPage},
            records::{ProductRecord, ProductUuid, ProductWithCategory},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    products: PgProductsRepository,
    categories: PgCategoriesRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            categories: PgCategoriesRepository::new(),
        }
    }

    /// Record `product` in its category's product set.
    ///
    /// Runs after the product insert has committed. Failures are logged and
    /// swallowed: the product stays created either way.
    async fn link_category(&self, product: &ProductRecord) {
        match self
            .write_backlink(product.category_uuid, product.uuid, true)
            .await
        {
            Ok(true) => debug!(
                product = %product.uuid,
                category = %product.category_uuid,
                "product linked to category"
            ),
            Ok(false) => warn!(
                product = %product.uuid,
                category = %product.category_uuid,
                "category backlink not added: category missing or already lists product"
            ),
            Err(source) => warn!(
                product = %product.uuid,
                category = %product.category_uuid,
                "failed to link product to category: {source}"
            ),
        }
    }

    /// Drop a deleted `product` from its category's product set.
    async fn unlink_category(&self, product: &ProductRecord) {
        if let Err(source) = self
            .write_backlink(product.category_uuid, product.uuid, false)
            .await
        {
            warn!(
                product = %product.uuid,
                category = %product.category_uuid,
                "failed to unlink deleted product from category: {source}"
            );
        }
    }

    async fn write_backlink(
        &self,
        category: CategoryUuid,
        product: ProductUuid,
        link: bool,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let changed = if link {
            self.categories
                .add_product(&mut tx, category, product)
                .await?
        } else {
            self.categories
                .remove_product(&mut tx, category, product)
                .await?
        };

        tx.commit().await?;

        Ok(changed)
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        options: ListProducts,
    ) -> Result<ProductPage, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let total_items = self.products.count_products(&mut tx).await?;
        let products = self.products.list_products(&mut tx, &options).await?;

        let categories = if options.expand && !products.is_empty() {
            let mut uuids: Vec<CategoryUuid> =
                products.iter().map(|product| product.category_uuid).collect();

            uuids.sort_unstable();
            uuids.dedup();

            self.categories.get_categories(&mut tx, &uuids).await?
        } else {
            Vec::new()
        };

        tx.commit().await?;

        let categories: FxHashMap<CategoryUuid, CategoryRecord> = categories
            .into_iter()
            .map(|category| (category.uuid, category))
            .collect();

        let items = products
            .into_iter()
            .map(|product| {
                let category = if options.expand {
                    categories.get(&product.category_uuid).cloned()
                } else {
                    None
                };

                ProductWithCategory { product, category }
            })
            .collect();

        Ok(ProductPage {
            items,
            pagination: Pagination::new(&options, total_items),
        })
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductWithCategory>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(product) = self.products.get_product(&mut tx, product).await? else {
            tx.commit().await?;

            return Ok(None);
        };

        let category = self
            .categories
            .get_category(&mut tx, product.category_uuid)
            .await?;

        tx.commit().await?;

        Ok(Some(ProductWithCategory { product, category }))
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .products
            .create_product(&mut tx, ProductUuid::new(), product)
            .await?;

        tx.commit().await?;

        self.link_category(&created).await;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = if update.is_empty() {
            self.products.get_product(&mut tx, product).await?
        } else {
            self.products.update_product(&mut tx, product, update).await?
        };

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let deleted = self.products.delete_product(&mut tx, product).await?;

        tx.commit().await?;

        if let Some(deleted) = &deleted {
            self.unlink_category(deleted).await;
        }

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves one page of products.
    ///
    /// A page past the end is empty, not an error.
    async fn list_products(&self, options: ListProducts)
    -> Result<ProductPage, ProductsServiceError>;

    /// Retrieve a single product with its category resolved.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductWithCategory>, ProductsServiceError>;

    /// Creates a product and adds it to its category's product set.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies a partial update, returning `None` when no product matched.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, ProductsServiceError>;

    /// Deletes a product, returning the deleted record if there was one.
    async fn delete_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            categories::CategoriesService,
            products::pagination::{SortField, SortOrder},
        },
        test::{
            TestContext,
            helpers::{create_category, create_product, new_product},
        },
    };

    use super::*;

    #[tokio::test]
    async fn create_product_returns_submitted_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;
        let new = new_product("A", 10, category.uuid);

        let product = ctx.products.create_product(new.clone()).await?;

        assert_eq!(product.name, new.name);
        assert_eq!(product.price, new.price);
        assert_eq!(product.image, new.image);
        assert_eq!(product.description, new.description);
        assert_eq!(product.category_uuid, new.category_uuid);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_links_category_exactly_once() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;

        let product = create_product(&ctx, "A", 10, category.uuid).await?;

        let category = ctx
            .categories
            .get_category(category.uuid)
            .await?
            .ok_or("category vanished")?;

        assert_eq!(category.products, vec![product.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn backlink_add_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;
        let product = create_product(&ctx, "A", 10, category.uuid).await?;

        let repeated = ctx
            .products
            .write_backlink(category.uuid, product.uuid, true)
            .await?;

        let category = ctx
            .categories
            .get_category(category.uuid)
            .await?
            .ok_or("category vanished")?;

        assert!(!repeated, "second add should not change the category");
        assert_eq!(category.products, vec![product.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_with_missing_category_still_succeeds() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "A", 10, CategoryUuid::new()).await?;

        let fetched = ctx.products.get_product(product.uuid).await?;

        assert_eq!(fetched.map(|found| found.product), Some(product));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_embeds_category() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;
        let product = create_product(&ctx, "A", 10, category.uuid).await?;

        let fetched = ctx
            .products
            .get_product(product.uuid)
            .await?
            .ok_or("product not found")?;

        assert_eq!(fetched.product, product);
        assert_eq!(
            fetched.category.map(|category| category.uuid),
            Some(category.uuid)
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let fetched = ctx.products.get_product(ProductUuid::new()).await?;

        assert!(fetched.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_paginates() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;

        for index in 0..5 {
            create_product(&ctx, &format!("P{index}"), index, category.uuid).await?;
        }

        let page = ctx
            .products
            .list_products(ListProducts {
                page: 2,
                limit: 2,
                ..ListProducts::default()
            })
            .await?;

        assert_eq!(page.items.len(), 2);
        assert_eq!(
            page.pagination,
            Pagination {
                current_page: 2,
                total_pages: 3,
                total_items: 5,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_page_past_the_end_is_empty() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;

        create_product(&ctx, "A", 10, category.uuid).await?;

        let page = ctx
            .products
            .list_products(ListProducts {
                page: 2,
                limit: 1,
                ..ListProducts::default()
            })
            .await?;

        assert!(page.items.is_empty());
        assert_eq!(
            page.pagination,
            Pagination {
                current_page: 2,
                total_pages: 1,
                total_items: 1,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_sorts_by_price_descending() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;

        for price in [30, 10, 20] {
            create_product(&ctx, "P", price, category.uuid).await?;
        }

        let page = ctx
            .products
            .list_products(ListProducts {
                sort: SortField::Price,
                order: SortOrder::Desc,
                ..ListProducts::default()
            })
            .await?;

        let prices: Vec<Decimal> = page.items.iter().map(|item| item.product.price).collect();

        assert_eq!(
            prices,
            vec![Decimal::from(30), Decimal::from(20), Decimal::from(10)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_defaults_to_oldest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;

        let first = create_product(&ctx, "first", 1, category.uuid).await?;
        let second = create_product(&ctx, "second", 2, category.uuid).await?;

        let page = ctx.products.list_products(ListProducts::default()).await?;

        let uuids: Vec<ProductUuid> = page.items.iter().map(|item| item.product.uuid).collect();

        assert_eq!(uuids, vec![first.uuid, second.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_expands_categories_only_when_asked() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;

        create_product(&ctx, "A", 10, category.uuid).await?;

        let plain = ctx.products.list_products(ListProducts::default()).await?;
        let expanded = ctx
            .products
            .list_products(ListProducts {
                expand: true,
                ..ListProducts::default()
            })
            .await?;

        assert!(plain.items.iter().all(|item| item.category.is_none()));
        assert!(
            expanded
                .items
                .iter()
                .all(|item| item.category.as_ref().map(|c| c.uuid) == Some(category.uuid))
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_replaces_only_given_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;
        let product = create_product(&ctx, "A", 10, category.uuid).await?;

        let updated = ctx
            .products
            .update_product(
                product.uuid,
                ProductUpdate {
                    price: Some(Decimal::new(1250, 2)),
                    ..ProductUpdate::default()
                },
            )
            .await?
            .ok_or("product not found")?;

        assert_eq!(updated.price, Decimal::new(1250, 2));
        assert_eq!(updated.name, product.name);
        assert!(updated.updated_at >= product.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_uuid_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let updated = ctx
            .products
            .update_product(
                ProductUuid::new(),
                ProductUpdate {
                    name: Some("B".to_string()),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert!(updated.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_returns_deleted_record_and_unlinks() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Shoes").await?;
        let product = create_product(&ctx, "A", 10, category.uuid).await?;

        let deleted = ctx.products.delete_product(product.uuid).await?;

        let category = ctx
            .categories
            .get_category(category.uuid)
            .await?
            .ok_or("category vanished")?;

        assert_eq!(deleted, Some(product.clone()));
        assert!(ctx.products.get_product(product.uuid).await?.is_none());
        assert!(category.products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_uuid_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let deleted = ctx.products.delete_product(ProductUuid::new()).await?;

        assert!(deleted.is_none());

        Ok(())
    }
}
