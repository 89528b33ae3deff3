//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every domain crate:
//! - Common error types and result aliases
//! - Conversions from infrastructure errors to the unified error type
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
