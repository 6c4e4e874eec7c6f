use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CategoryValidationError;

pub const MAX_CODE_LENGTH: usize = 32;
pub const MAX_NAME_LENGTH: usize = 256;

/// A stored category. `code` is unique and always upper-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub code: String,
    pub name: String,
}

/// Body of `POST /categories`. Missing fields deserialize as empty strings
/// so they fail validation instead of the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCategory {
    #[serde(default)]
    #[schema(example = "electronics", max_length = 32)]
    pub code: String,
    #[serde(default)]
    #[schema(example = "Electronics", max_length = 256)]
    pub name: String,
}

impl CreateCategory {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Checks the rules in order and reports the first one broken.
    ///
    /// Emptiness is judged on trimmed values; length on the raw input, in characters.
    /// The code must also fit once upper-cased, since some characters expand (`ß` → `SS`).
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.code.trim().is_empty() {
            return Err(CategoryValidationError::CodeRequired);
        }
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::NameRequired);
        }
        if self.code.chars().count() > MAX_CODE_LENGTH
            || self.normalized_code().chars().count() > MAX_CODE_LENGTH
        {
            return Err(CategoryValidationError::CodeTooLong);
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(CategoryValidationError::NameTooLong);
        }
        Ok(())
    }

    /// The code as it is stored.
    pub fn normalized_code(&self) -> String {
        self.code.to_uppercase()
    }
}

/// `{code, name}` as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = "CLOTHING")]
    pub code: String,
    #[schema(example = "Clothing")]
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            code: category.code,
            name: category.name,
        }
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            code: category.code.clone(),
            name: category.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryResponse>,
}

impl From<Vec<Category>> for CategoryListResponse {
    fn from(categories: Vec<Category>) -> Self {
        Self {
            categories: categories.into_iter().map(CategoryResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert_eq!(CreateCategory::new("shoes", "Shoes").validate(), Ok(()));
    }

    #[test]
    fn test_blank_code_is_required_not_too_long() {
        let input = CreateCategory::new("   ", "Electronics");
        assert_eq!(input.validate(), Err(CategoryValidationError::CodeRequired));
    }

    #[test]
    fn test_code_checked_before_name() {
        let input = CreateCategory::new("", "");
        assert_eq!(input.validate(), Err(CategoryValidationError::CodeRequired));
    }

    #[test]
    fn test_blank_name_is_required() {
        let input = CreateCategory::new("SHOES", "\t \n");
        assert_eq!(input.validate(), Err(CategoryValidationError::NameRequired));
    }

    #[test]
    fn test_required_checks_run_before_length_checks() {
        let input = CreateCategory::new("X".repeat(46), "  ");
        assert_eq!(input.validate(), Err(CategoryValidationError::NameRequired));
    }

    #[test]
    fn test_code_length_boundary() {
        assert_eq!(CreateCategory::new("X".repeat(32), "ok").validate(), Ok(()));
        assert_eq!(
            CreateCategory::new("X".repeat(46), "ok").validate(),
            Err(CategoryValidationError::CodeTooLong)
        );
    }

    #[test]
    fn test_code_length_counts_untrimmed_input() {
        let padded = format!(" {} ", "X".repeat(31));
        assert_eq!(
            CreateCategory::new(padded, "ok").validate(),
            Err(CategoryValidationError::CodeTooLong)
        );
    }

    #[test]
    fn test_name_length_boundary() {
        assert_eq!(CreateCategory::new("OK", "A".repeat(256)).validate(), Ok(()));
        assert_eq!(
            CreateCategory::new("OK", "A".repeat(257)).validate(),
            Err(CategoryValidationError::NameTooLong)
        );
    }

    #[test]
    fn test_length_is_measured_in_characters() {
        assert_eq!(CreateCategory::new("É".repeat(32), "ok").validate(), Ok(()));
    }

    #[test]
    fn test_code_must_fit_after_upper_casing() {
        let input = CreateCategory::new("ß".repeat(32), "Sharp s");
        assert_eq!(input.code.chars().count(), 32);
        assert_eq!(input.normalized_code().chars().count(), 64);
        assert_eq!(input.validate(), Err(CategoryValidationError::CodeTooLong));

        let input = CreateCategory::new("ß".repeat(16), "Sharp s");
        assert_eq!(input.validate(), Ok(()));
        assert_eq!(input.normalized_code(), "SS".repeat(16));
    }

    #[test]
    fn test_normalized_code_is_upper_case() {
        assert_eq!(
            CreateCategory::new("electronics", "x").normalized_code(),
            "ELECTRONICS"
        );
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let input: CreateCategory = serde_json::from_str(r#"{"name":"Shoes"}"#).unwrap();
        assert_eq!(input.code, "");
        assert_eq!(input.validate(), Err(CategoryValidationError::CodeRequired));
    }
}
