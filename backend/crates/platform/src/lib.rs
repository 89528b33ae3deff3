//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (bcrypt, fixed work factor)
//! - Signed bearer tokens (JWT, HS256)
//! - `Authorization: Bearer <token>` header extraction

pub mod bearer;
pub mod password;
pub mod token;
