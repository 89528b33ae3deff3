//! Space Entity ("espaco")
//!
//! Read-only reference data, pre-seeded by migration. Not created,
//! mutated, or deleted through this API.

use serde::Serialize;

/// A bookable room/lab.
#[derive(Debug, Clone, Serialize)]
pub struct Space {
    pub id: i32,
    pub nome: String,
}
