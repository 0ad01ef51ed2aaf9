//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Validation**: Rejecting missing or blank required fields before touching the store
//! - **Existence checks**: Turning missing rows into `NotFound` errors
//! - **Assembly**: Hydrating boards into nested read views with comment threads
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod aggregate;
pub mod assembler;
pub mod board;
pub mod card;
pub mod column;
pub mod comment;
pub mod thread;

#[cfg(test)]
mod test;

/// Keeps a required text field, trimmed, only if it has non-whitespace content.
fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
