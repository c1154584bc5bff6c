//! Shared types for the vote-agreement system
//!
//! Contains the legislative data model (legislators, roll calls, votes),
//! the shared error type and the logging utilities used by every component.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
