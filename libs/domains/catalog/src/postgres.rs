use async_trait::async_trait;
use domain_categories::entity as category;
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IsolationLevel, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    TransactionTrait,
};

use crate::{
    entity::{product, variant},
    error::CatalogResult,
    models::{Product, ProductFilter, ProductPage},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self, filter: ProductFilter) -> CatalogResult<ProductPage> {
        // Count and page must see the same snapshot.
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
            .await?;

        let query = filtered(&filter);
        let total = query.clone().count(&txn).await?;

        let models = query
            .order_by_asc(product::Column::Id)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&txn)
            .await?;
        let items = with_relations(&txn, models).await?;

        txn.commit().await?;

        tracing::debug!(total, returned = items.len(), "Listed products");
        Ok(ProductPage { items, total })
    }

    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Product>> {
        let Some(model) = product::Entity::find()
            .filter(product::Column::Code.eq(code))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut products = with_relations(&self.db, vec![model]).await?;
        Ok(products.pop())
    }
}

fn filtered(filter: &ProductFilter) -> Select<product::Entity> {
    let mut query = product::Entity::find();

    if let Some(code) = &filter.category {
        query = query
            .inner_join(category::Entity)
            .filter(category::Column::Code.eq(code.as_str()));
    }

    if let Some(bound) = filter.price_less_than {
        query = query.filter(product::Column::Price.lt(bound));
    }

    query
}

/// Loads categories and variants for a batch of products in two queries.
async fn with_relations<C: ConnectionTrait>(
    db: &C,
    models: Vec<product::Model>,
) -> Result<Vec<Product>, DbErr> {
    let categories = models.load_one(category::Entity, db).await?;
    let variants = models
        .load_many(variant::Entity::find().order_by_asc(variant::Column::Id), db)
        .await?;

    Ok(models
        .into_iter()
        .zip(categories)
        .zip(variants)
        .map(|((model, category), variants)| model.into_product(category, variants))
        .collect())
}
