//! Serializable DTOs forming the public JSON contract of the API.

pub mod api;
pub mod kanban;
