//! Extractors whose rejections render as [`AppError`](crate::AppError) bodies.

pub mod json_body;

pub use json_body::JsonBody;
