//! PostgreSQL Repository Implementations

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::booking::{Booking, BookingView, ESTADO_INDISPONIVEL, NewBooking};
use crate::domain::repository::{BookingRepository, SpaceRepository};
use crate::domain::space::Space;
use crate::error::AgendaResult;

/// PostgreSQL-backed agenda repository (bookings + space catalog)
#[derive(Clone)]
pub struct PgAgendaRepository {
    pool: PgPool,
}

impl PgAgendaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i32,
    professor_id: i32,
    espaco_id: i32,
    data: NaiveDate,
    numero_aula: i32,
    estado: String,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            professor_id: row.professor_id,
            espaco_id: row.espaco_id,
            data: row.data,
            numero_aula: row.numero_aula,
            estado: row.estado,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookingViewRow {
    id: i32,
    professor_id: i32,
    professor: String,
    laboratorio: String,
    data: String,
    numero_aula: i32,
    estado: String,
}

impl From<BookingViewRow> for BookingView {
    fn from(row: BookingViewRow) -> Self {
        BookingView {
            id: row.id,
            professor_id: row.professor_id,
            professor: row.professor,
            laboratorio: row.laboratorio,
            data: row.data,
            numero_aula: row.numero_aula,
            estado: row.estado,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SpaceRow {
    id: i32,
    nome: String,
}

// ============================================================================
// Booking Repository Implementation
// ============================================================================

impl BookingRepository for PgAgendaRepository {
    async fn insert(&self, booking: &NewBooking) -> AgendaResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO agendamentos (professor_id, espaco_id, data, numero_aula, estado)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, professor_id, espaco_id, data, numero_aula, estado
            "#,
        )
        .bind(booking.professor_id)
        .bind(booking.espaco_id)
        .bind(booking.data)
        .bind(booking.numero_aula)
        .bind(ESTADO_INDISPONIVEL)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_owner(&self, id: i32) -> AgendaResult<Option<i32>> {
        let owner = sqlx::query_scalar::<_, i32>(
            "SELECT professor_id FROM agendamentos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }

    async fn delete_owned(&self, id: i32, professor_id: i32) -> AgendaResult<u64> {
        let affected = sqlx::query(
            "DELETE FROM agendamentos WHERE id = $1 AND professor_id = $2",
        )
        .bind(id)
        .bind(professor_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected)
    }

    async fn list_detailed(&self) -> AgendaResult<Vec<BookingView>> {
        let rows = sqlx::query_as::<_, BookingViewRow>(
            r#"
            SELECT
                a.id,
                a.professor_id,
                p.nome AS professor,
                e.nome AS laboratorio,
                TO_CHAR(a.data, 'DD/MM/YYYY') AS data,
                a.numero_aula,
                a.estado
            FROM agendamentos a
            JOIN professores p ON p.id = a.professor_id
            JOIN espacos e ON e.id = a.espaco_id
            ORDER BY a.data ASC, a.numero_aula ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookingView::from).collect())
    }
}

// ============================================================================
// Space Repository Implementation
// ============================================================================

impl SpaceRepository for PgAgendaRepository {
    async fn list(&self) -> AgendaResult<Vec<Space>> {
        let rows = sqlx::query_as::<_, SpaceRow>(
            "SELECT id, nome FROM espacos ORDER BY nome ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Space {
                id: row.id,
                nome: row.nome,
            })
            .collect())
    }
}
