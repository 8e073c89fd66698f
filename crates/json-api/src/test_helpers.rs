//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use serde_json::{Map, json};

use storefront_app::{
    context::AppContext,
    domain::{
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid, category: CategoryUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "A".to_string(),
        price: Decimal::from(10),
        image: "i".to_string(),
        description: "d".to_string(),
        category_uuid: category,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_category(uuid: CategoryUuid, products: Vec<ProductUuid>) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: "Shoes".to_string(),
        products,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_user(uuid: UserUuid) -> UserRecord {
    let mut profile = Map::new();

    profile.insert("displayName".to_string(), json!("Ada"));

    UserRecord {
        uuid,
        profile,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_get_category().never();
    categories.expect_create_category().never();

    categories
}

pub(crate) fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_get_user().never();
    users.expect_create_user().never();
    users.expect_update_user().never();

    users
}

fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(products),
            categories: Arc::new(strict_categories_mock()),
            users: Arc::new(strict_users_mock()),
        },
        route,
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(strict_products_mock()),
            categories: Arc::new(categories),
            users: Arc::new(strict_users_mock()),
        },
        route,
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(strict_products_mock()),
            categories: Arc::new(strict_categories_mock()),
            users: Arc::new(users),
        },
        route,
    )
}
