//! HTTP request handlers for the kanban API.
//!
//! Controllers decode requests, convert DTOs into service parameters, call the service
//! layer, and wrap the resulting domain models in the `ApiResponse` envelope. Each
//! handler carries a `utoipa::path` annotation that feeds the generated OpenAPI document.

pub mod board;
pub mod card;
pub mod column;
pub mod comment;
