//! Unit tests for the agenda crate
//!
//! Use cases run against an in-memory repository that enforces the same
//! uniqueness rule as the database schema.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::application::{
    CreateBookingInput, CreateBookingUseCase, CreateManyInput, CreateManyUseCase,
    DeleteBookingUseCase, ListBookingsUseCase,
};
use crate::domain::booking::{Booking, BookingView, ESTADO_INDISPONIVEL, NewBooking};
use crate::domain::repository::{BookingRepository, SpaceRepository};
use crate::domain::space::Space;
use crate::error::{AgendaError, AgendaResult};

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: Vec<Booking>,
}

/// In-memory booking store. `insert` rejects a duplicate
/// (espaco, data, aula) triple exactly like the unique constraint.
#[derive(Clone, Default)]
struct MemAgendaRepository {
    inner: Arc<Mutex<Inner>>,
}

impl BookingRepository for MemAgendaRepository {
    async fn insert(&self, booking: &NewBooking) -> AgendaResult<Booking> {
        let mut inner = self.inner.lock().unwrap();
        let taken = inner.rows.iter().any(|b| {
            b.espaco_id == booking.espaco_id
                && b.data == booking.data
                && b.numero_aula == booking.numero_aula
        });
        if taken {
            return Err(AgendaError::SlotTaken);
        }
        inner.next_id += 1;
        let created = Booking {
            id: inner.next_id,
            professor_id: booking.professor_id,
            espaco_id: booking.espaco_id,
            data: booking.data,
            numero_aula: booking.numero_aula,
            estado: ESTADO_INDISPONIVEL.to_string(),
        };
        inner.rows.push(created.clone());
        Ok(created)
    }

    async fn find_owner(&self, id: i32) -> AgendaResult<Option<i32>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.professor_id))
    }

    async fn delete_owned(&self, id: i32, professor_id: i32) -> AgendaResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner
            .rows
            .retain(|b| !(b.id == id && b.professor_id == professor_id));
        Ok((before - inner.rows.len()) as u64)
    }

    async fn list_detailed(&self) -> AgendaResult<Vec<BookingView>> {
        let inner = self.inner.lock().unwrap();
        let mut rows = inner.rows.clone();
        rows.sort_by_key(|b| (b.data, b.numero_aula));
        Ok(rows
            .into_iter()
            .map(|b| BookingView {
                id: b.id,
                professor_id: b.professor_id,
                professor: format!("Professor {}", b.professor_id),
                laboratorio: format!("Espaço {}", b.espaco_id),
                data: b.data.format("%d/%m/%Y").to_string(),
                numero_aula: b.numero_aula,
                estado: b.estado,
            })
            .collect())
    }
}

impl SpaceRepository for MemAgendaRepository {
    async fn list(&self) -> AgendaResult<Vec<Space>> {
        Ok(vec![
            Space {
                id: 1,
                nome: "Laboratório de Física".to_string(),
            },
            Space {
                id: 2,
                nome: "Laboratório de Química".to_string(),
            },
        ])
    }
}

/// Wrapper store that injects storage-level interference: a delete
/// whose row disappears after the ownership check, and a slot whose
/// insert fails with a non-conflict database error.
#[derive(Clone)]
struct FlakyAgendaRepository {
    inner: MemAgendaRepository,
    vanish_on_delete: bool,
    failing_slot: Option<i32>,
}

impl BookingRepository for FlakyAgendaRepository {
    async fn insert(&self, booking: &NewBooking) -> AgendaResult<Booking> {
        if self.failing_slot == Some(booking.numero_aula) {
            return Err(AgendaError::Database(sqlx::Error::PoolTimedOut));
        }
        self.inner.insert(booking).await
    }

    async fn find_owner(&self, id: i32) -> AgendaResult<Option<i32>> {
        self.inner.find_owner(id).await
    }

    async fn delete_owned(&self, id: i32, professor_id: i32) -> AgendaResult<u64> {
        if self.vanish_on_delete {
            return Ok(0);
        }
        self.inner.delete_owned(id, professor_id).await
    }

    async fn list_detailed(&self) -> AgendaResult<Vec<BookingView>> {
        self.inner.list_detailed().await
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn create_input(professor_id: i32, espaco_id: i32, data: &str, numero_aula: i32) -> CreateBookingInput {
    CreateBookingInput {
        professor_id: Some(professor_id),
        espaco_id: Some(espaco_id),
        data: Some(date(data)),
        numero_aula: Some(numero_aula),
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_sets_fixed_estado() {
    let repo = Arc::new(MemAgendaRepository::default());
    let use_case = CreateBookingUseCase::new(repo);

    let created = use_case
        .execute(create_input(1, 1, "2024-03-01", 3))
        .await
        .unwrap();
    assert_eq!(created.estado, "indisponivel");
}

#[tokio::test]
async fn test_double_create_yields_one_conflict() {
    let repo = Arc::new(MemAgendaRepository::default());
    let use_case = CreateBookingUseCase::new(repo);

    let first = use_case.execute(create_input(1, 1, "2024-03-01", 3)).await;
    let second = use_case.execute(create_input(2, 1, "2024-03-01", 3)).await;

    assert!(first.is_ok());
    assert!(matches!(second, Err(AgendaError::SlotTaken)));
}

#[tokio::test]
async fn test_same_slot_different_space_is_free() {
    let repo = Arc::new(MemAgendaRepository::default());
    let use_case = CreateBookingUseCase::new(repo);

    use_case
        .execute(create_input(1, 1, "2024-03-01", 3))
        .await
        .unwrap();
    assert!(use_case.execute(create_input(1, 2, "2024-03-01", 3)).await.is_ok());
}

#[tokio::test]
async fn test_create_missing_field_is_rejected() {
    let repo = Arc::new(MemAgendaRepository::default());
    let use_case = CreateBookingUseCase::new(repo);

    let input = CreateBookingInput {
        professor_id: Some(1),
        espaco_id: None,
        data: Some(date("2024-03-01")),
        numero_aula: Some(3),
    };
    assert!(matches!(
        use_case.execute(input).await,
        Err(AgendaError::MissingFields)
    ));
}

// ============================================================================
// Batch create
// ============================================================================

#[tokio::test]
async fn test_batch_collects_partial_failures() {
    let repo = Arc::new(MemAgendaRepository::default());
    let use_case = CreateManyUseCase::new(repo);

    let outcome = use_case
        .execute(CreateManyInput {
            professor_id: Some(1),
            espaco_id: Some(1),
            data: Some(date("2024-03-01")),
            aulas: Some(vec![1, 2, 2]),
        })
        .await
        .unwrap();

    assert_eq!(outcome.inseridos.len(), 2);
    assert_eq!(outcome.erros, vec!["Conflito na aula 2".to_string()]);
}

#[tokio::test]
async fn test_batch_conflict_does_not_abort_later_slots() {
    let repo = Arc::new(MemAgendaRepository::default());

    // Slot 2 pre-booked by someone else.
    CreateBookingUseCase::new(repo.clone())
        .execute(create_input(9, 1, "2024-03-01", 2))
        .await
        .unwrap();

    let outcome = CreateManyUseCase::new(repo)
        .execute(CreateManyInput {
            professor_id: Some(1),
            espaco_id: Some(1),
            data: Some(date("2024-03-01")),
            aulas: Some(vec![1, 2, 3]),
        })
        .await
        .unwrap();

    let slots: Vec<i32> = outcome.inseridos.iter().map(|b| b.numero_aula).collect();
    assert_eq!(slots, vec![1, 3]);
    assert_eq!(outcome.erros, vec!["Conflito na aula 2".to_string()]);
}

#[tokio::test]
async fn test_batch_reports_unknown_error_for_failed_slot() {
    let repo = Arc::new(FlakyAgendaRepository {
        inner: MemAgendaRepository::default(),
        vanish_on_delete: false,
        failing_slot: Some(2),
    });

    let outcome = CreateManyUseCase::new(repo)
        .execute(CreateManyInput {
            professor_id: Some(1),
            espaco_id: Some(1),
            data: Some(date("2024-03-01")),
            aulas: Some(vec![1, 2, 3]),
        })
        .await
        .unwrap();

    // A non-conflict failure is reported per slot, without aborting
    // the rest of the batch.
    let slots: Vec<i32> = outcome.inseridos.iter().map(|b| b.numero_aula).collect();
    assert_eq!(slots, vec![1, 3]);
    assert_eq!(outcome.erros, vec!["Erro desconhecido na aula 2".to_string()]);
}

#[tokio::test]
async fn test_batch_empty_slot_list_is_rejected() {
    let repo = Arc::new(MemAgendaRepository::default());
    let use_case = CreateManyUseCase::new(repo);

    let result = use_case
        .execute(CreateManyInput {
            professor_id: Some(1),
            espaco_id: Some(1),
            data: Some(date("2024-03-01")),
            aulas: Some(vec![]),
        })
        .await;
    assert!(matches!(result, Err(AgendaError::MissingFields)));

    let use_case = CreateManyUseCase::new(Arc::new(MemAgendaRepository::default()));
    let result = use_case
        .execute(CreateManyInput {
            professor_id: Some(1),
            espaco_id: None,
            data: Some(date("2024-03-01")),
            aulas: Some(vec![1]),
        })
        .await;
    assert!(matches!(result, Err(AgendaError::MissingFields)));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_owner_can_delete() {
    let repo = Arc::new(MemAgendaRepository::default());
    let created = CreateBookingUseCase::new(repo.clone())
        .execute(create_input(1, 1, "2024-03-01", 3))
        .await
        .unwrap();

    DeleteBookingUseCase::new(repo.clone())
        .execute(created.id, 1)
        .await
        .unwrap();

    assert!(ListBookingsUseCase::new(repo).execute().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_owner_cannot_delete() {
    let repo = Arc::new(MemAgendaRepository::default());
    let created = CreateBookingUseCase::new(repo.clone())
        .execute(create_input(1, 1, "2024-03-01", 3))
        .await
        .unwrap();

    let result = DeleteBookingUseCase::new(repo.clone())
        .execute(created.id, 2)
        .await;
    assert!(matches!(result, Err(AgendaError::NotOwner)));

    // Booking must survive the rejected attempt.
    assert_eq!(ListBookingsUseCase::new(repo).execute().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let repo = Arc::new(MemAgendaRepository::default());
    let result = DeleteBookingUseCase::new(repo).execute(999, 1).await;
    assert!(matches!(result, Err(AgendaError::NotFound)));
}

#[tokio::test]
async fn test_delete_raced_away_is_not_found() {
    let mem = MemAgendaRepository::default();
    let created = CreateBookingUseCase::new(Arc::new(mem.clone()))
        .execute(create_input(1, 1, "2024-03-01", 3))
        .await
        .unwrap();

    // The ownership check passes, then the conditioned delete affects
    // zero rows. The caller gets a 404, not a success.
    let repo = Arc::new(FlakyAgendaRepository {
        inner: mem,
        vanish_on_delete: true,
        failing_slot: None,
    });
    let err = DeleteBookingUseCase::new(repo)
        .execute(created.id, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, AgendaError::Vanished));
    assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    assert_eq!(
        err.to_string(),
        "Agendamento não encontrado ou não pertence a você."
    );
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_orders_by_date_then_slot() {
    let repo = Arc::new(MemAgendaRepository::default());
    let use_case = CreateBookingUseCase::new(repo.clone());

    use_case.execute(create_input(1, 1, "2024-03-02", 1)).await.unwrap();
    use_case.execute(create_input(1, 1, "2024-03-01", 5)).await.unwrap();
    use_case.execute(create_input(1, 1, "2024-03-01", 2)).await.unwrap();

    let views = ListBookingsUseCase::new(repo).execute().await.unwrap();
    let order: Vec<(String, i32)> = views
        .into_iter()
        .map(|v| (v.data, v.numero_aula))
        .collect();

    assert_eq!(
        order,
        vec![
            ("01/03/2024".to_string(), 2),
            ("01/03/2024".to_string(), 5),
            ("02/03/2024".to_string(), 1),
        ]
    );
}
