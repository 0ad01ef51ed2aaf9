//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. `*Params` types carry raw request
//! input into the service layer, where it is validated; `New*` and `*Changes` types
//! carry validated values into the repositories.

pub mod board;
pub mod card;
pub mod column;
pub mod comment;
pub mod pagination;
