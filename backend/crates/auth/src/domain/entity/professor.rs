//! Professor Entity
//!
//! The only authenticated identity in the system. Created at registration,
//! never mutated or deleted through this API.

/// A professor ready to be persisted. The id is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewProfessor {
    pub nome: String,
    /// Unique, case-sensitive
    pub email: String,
    /// bcrypt hash - the clear text never reaches this type
    pub senha_hash: String,
}

/// Stored credentials, loaded for login verification.
///
/// `senha_hash` stays inside the auth crate; only `id` and `nome`
/// ever reach the wire.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub id: i32,
    pub nome: String,
    pub senha_hash: String,
}
