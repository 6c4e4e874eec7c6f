use std::sync::Arc;
use tracing::instrument;

use crate::error::CategoryResult;
use crate::models::{CategoryListResponse, CategoryResponse, CreateCategory};
use crate::repository::CategoryRepository;

#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<CategoryListResponse> {
        let categories = self.repository.list().await?;
        Ok(categories.into())
    }

    /// Validates `input`, upper-cases the code and stores the name as given.
    /// Nothing reaches the repository when validation fails.
    #[instrument(skip(self))]
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<CategoryResponse> {
        input.validate()?;

        let code = input.normalized_code();
        let category = self.repository.create(code, input.name).await?;
        Ok(category.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CategoryError, CategoryValidationError};
    use crate::models::Category;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn test_create_upper_cases_code_and_keeps_name() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_create()
            .with(eq("ELECTRONICS".to_string()), eq(" Electronics & more".to_string()))
            .times(1)
            .returning(|code, name| Ok(Category { id: 7, code, name }));

        let service = CategoryService::new(mock_repo);
        let created = service
            .create_category(CreateCategory::new("electronics", " Electronics & more"))
            .await
            .unwrap();

        assert_eq!(created.code, "ELECTRONICS");
        assert_eq!(created.name, " Electronics & more");
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_repository() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_create().never();

        let service = CategoryService::new(mock_repo);
        let cases = [
            (CreateCategory::new("   ", "Electronics"), CategoryValidationError::CodeRequired),
            (CreateCategory::new("SHOES", ""), CategoryValidationError::NameRequired),
            (CreateCategory::new("X".repeat(46), "Shoes"), CategoryValidationError::CodeTooLong),
            (CreateCategory::new("SHOES", "A".repeat(257)), CategoryValidationError::NameTooLong),
        ];

        for (input, expected) in cases {
            let err = service.create_category(input).await.unwrap_err();
            assert!(
                matches!(err, CategoryError::Validation(kind) if kind == expected),
                "expected {expected:?}, got {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_conflict_is_passed_through() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_create()
            .returning(|code, _| Err(CategoryError::Conflict(code)));

        let service = CategoryService::new(mock_repo);
        let err = service
            .create_category(CreateCategory::new("shoes", "Shoes"))
            .await
            .unwrap_err();

        assert!(matches!(err, CategoryError::Conflict(code) if code == "SHOES"));
    }

    #[tokio::test]
    async fn test_list_maps_to_code_and_name() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_list().returning(|| {
            Ok(vec![
                Category { id: 1, code: "CLOTHING".into(), name: "Clothing".into() },
                Category { id: 2, code: "SHOES".into(), name: "Shoes".into() },
            ])
        });

        let service = CategoryService::new(mock_repo);
        let response = service.list_categories().await.unwrap();

        assert_eq!(
            response.categories,
            vec![
                CategoryResponse { code: "CLOTHING".into(), name: "Clothing".into() },
                CategoryResponse { code: "SHOES".into(), name: "Shoes".into() },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_failure_is_repository_error() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(DbErr::Custom("connection reset".into()).into()));

        let service = CategoryService::new(mock_repo);
        let err = service.list_categories().await.unwrap_err();

        assert!(matches!(err, CategoryError::Repository(_)));
    }
}
