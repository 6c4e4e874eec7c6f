//! Shared test infrastructure for the domain crates.
//!
//! - `TestDatabase`: PostgreSQL container with the catalog migrations and seed data applied
//!   (feature `postgres`, on by default)
//! - [`TestDataBuilder`]: deterministic, per-test unique codes and names
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn creates_category() {
//!     let db = TestDatabase::new().await;
//!     let data = TestDataBuilder::from_test_name("creates_category");
//!     let code = data.code("cat");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Derives stable identifiers from a seed so reruns produce the same data
/// while different tests do not collide on unique columns.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let a = TestDataBuilder::from_test_name("test_create_category");
    /// let b = TestDataBuilder::from_test_name("test_create_category");
    /// assert_eq!(a.code("cat"), b.code("cat"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Upper-case code that fits a 32 character category code column.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let code = TestDataBuilder::new(7).code("cat");
    /// assert_eq!(code, "T-CAT-000007");
    /// ```
    pub fn code(&self, prefix: &str) -> String {
        let prefix: String = prefix.chars().take(16).collect();
        format!("T-{}-{:06}", prefix.to_uppercase(), self.seed % 1_000_000)
    }

    /// Free-text name, unique per seed.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}
