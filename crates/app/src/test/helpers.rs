//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::{
        categories::{
            CategoriesService, CategoriesServiceError,
            data::NewCategory,
            records::{CategoryRecord, CategoryUuid},
        },
        products::{
            ProductsService, ProductsServiceError, data::NewProduct, records::ProductRecord,
        },
    },
    test::TestContext,
};

pub(crate) fn new_product(name: &str, price: i64, category: CategoryUuid) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: Decimal::from(price),
        image: format!("https://img.example.com/{name}.png"),
        description: format!("{name} description"),
        category_uuid: category,
    }
}

pub(crate) async fn create_category(
    ctx: &TestContext,
    name: &str,
) -> Result<CategoryRecord, CategoriesServiceError> {
    ctx.categories
        .create_category(NewCategory {
            name: name.to_string(),
        })
        .await
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: i64,
    category: CategoryUuid,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(new_product(name, price, category))
        .await
}
