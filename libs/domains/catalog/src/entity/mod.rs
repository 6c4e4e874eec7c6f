pub mod product;
pub mod variant;
