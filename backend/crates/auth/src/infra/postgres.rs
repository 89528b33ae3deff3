//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::professor::{Credentials, NewProfessor};
use crate::domain::repository::ProfessorRepository;
use crate::error::AuthResult;

/// PostgreSQL-backed professor repository
#[derive(Clone)]
pub struct PgProfessorRepository {
    pool: PgPool,
}

impl PgProfessorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    id: i32,
    nome: String,
    senha_hash: String,
}

impl From<CredentialsRow> for Credentials {
    fn from(row: CredentialsRow) -> Self {
        Credentials {
            id: row.id,
            nome: row.nome,
            senha_hash: row.senha_hash,
        }
    }
}

impl ProfessorRepository for PgProfessorRepository {
    async fn create(&self, professor: &NewProfessor) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO professores (nome, email, senha_hash)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&professor.nome)
        .bind(&professor.email)
        .bind(&professor.senha_hash)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Credentials>> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT id, nome, senha_hash
            FROM professores
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Credentials::from))
    }
}
