use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CategoryError, CategoryResult};
use crate::models::Category;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories in id order
    async fn list(&self) -> CategoryResult<Vec<Category>>;

    /// Stores a category with an already normalized code.
    /// A duplicate code fails with [`CategoryError::Conflict`].
    async fn create(&self, code: String, name: String) -> CategoryResult<Category>;
}

/// In-memory implementation (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<Vec<Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated repository. Ids are assigned in iteration order starting at 1.
    pub fn with_categories<I, C, N>(categories: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let categories = categories
            .into_iter()
            .zip(1..)
            .map(|((code, name), id)| Category {
                id,
                code: code.into(),
                name: name.into(),
            })
            .collect();

        Self {
            categories: Arc::new(RwLock::new(categories)),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> CategoryResult<Vec<Category>> {
        Ok(self.categories.read().await.clone())
    }

    async fn create(&self, code: String, name: String) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;

        if categories.iter().any(|c| c.code == code) {
            return Err(CategoryError::Conflict(code));
        }

        let id = categories.last().map_or(1, |c| c.id + 1);
        let category = Category { id, code, name };
        categories.push(category.clone());

        tracing::info!(category_id = id, code = %category.code, "Created category");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryCategoryRepository::new();

        let first = repo.create("SHOES".into(), "Shoes".into()).await.unwrap();
        let second = repo.create("BAGS".into(), "Bags".into()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_duplicate_code_conflicts() {
        let repo = InMemoryCategoryRepository::with_categories([("SHOES", "Shoes")]);

        let err = repo
            .create("SHOES".into(), "Other shoes".into())
            .await
            .unwrap_err();

        assert!(matches!(err, CategoryError::Conflict(code) if code == "SHOES"));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_with_categories_keeps_order() {
        let repo = InMemoryCategoryRepository::with_categories([
            ("CLOTHING", "Clothing"),
            ("SHOES", "Shoes"),
        ]);

        let codes: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| (c.id, c.code))
            .collect();
        assert_eq!(codes, vec![(1, "CLOTHING".to_string()), (2, "SHOES".to_string())]);
    }
}
