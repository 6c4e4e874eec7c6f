use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};

use crate::{
    entity,
    error::{CategoryError, CategoryResult},
    models::Category,
    repository::CategoryRepository,
};

pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create(&self, code: String, name: String) -> CategoryResult<Category> {
        let model = entity::Entity::insert(entity::ActiveModel::new_category(code.clone(), name))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_insert_error(e, code))?;

        tracing::info!(category_id = model.id, code = %model.code, "Created category");
        Ok(model.into())
    }
}

fn map_insert_error(err: DbErr, code: String) -> CategoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => CategoryError::Conflict(code),
        _ => CategoryError::Repository(err),
    }
}
