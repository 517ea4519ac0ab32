//! HTTP request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::auth::AuthUser;
use crate::clock;
use crate::error::ApiError;
use crate::filter::{EntryFilter, ListParams};
use crate::highlight::{self, HighlightWindow};
use crate::models::ScheduleEntry;
use crate::server::AppState;
use crate::timer::{self, StartCommand};
use crate::validation::{self, CreatePayload, UpdatePayload};

/// Liveness check; the only route without authentication
pub async fn ping() -> Json<Value> {
    Json(json!({"message": "Service is up"}))
}

/// List the caller's entries, optionally filtered by day, category,
/// time-of-day bucket, and activity substring
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    AuthUser(owner_id): AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ScheduleEntry>>, ApiError> {
    // A day value outside the enumerated set can match nothing
    let Some(filter) = EntryFilter::resolve(params) else {
        return Ok(Json(Vec::new()));
    };

    let entries = state.db.list_entries(owner_id, &filter).await?;
    Ok(Json(entries))
}

/// Create an entry; the owner comes from the token, never from the body
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    AuthUser(owner_id): AuthUser,
    Json(payload): Json<CreatePayload>,
) -> Result<(StatusCode, Json<ScheduleEntry>), ApiError> {
    let new = validation::validate_create(payload)?;
    let entry = state.db.insert_entry(owner_id, new).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Get one entry by id
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ScheduleEntry>, ApiError> {
    let entry = state
        .db
        .get_entry(owner_id, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(entry))
}

/// Partially update one entry
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePayload>,
) -> Result<Json<ScheduleEntry>, ApiError> {
    let entry = state
        .db
        .get_entry(owner_id, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let updated = validation::apply_update(entry, payload)?;
    let saved = state.db.save_entry(&updated).await?;
    Ok(Json(saved))
}

/// Delete one entry
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let removed = state.db.delete_entry(owner_id, id).await?;
    if !removed {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({"message": "Schedule entry deleted"})))
}

/// Highlight the earliest activity starting within the next hour of the
/// current local day
pub async fn highlight(
    State(state): State<Arc<AppState>>,
    AuthUser(owner_id): AuthUser,
) -> Result<Json<Value>, ApiError> {
    let now = clock::now_local();
    let day = clock::current_day(&now);
    let window = HighlightWindow::starting_at(now.time());

    let entries = state.db.list_entries_for_day(owner_id, day).await?;

    match highlight::pick_nearby(&entries, &window) {
        Some(entry) => Ok(Json(json!({
            "day": entry.day,
            "startTime": entry.start_time,
            "endTime": entry.end_time,
            "activity": entry.activity,
            "category": entry.category,
        }))),
        None => Ok(Json(json!({
            "message": "No schedule entry found in the next hour",
            "now": window.from.format("%H:%M").to_string(),
            "oneHourLater": window.until.format("%H:%M").to_string(),
            "day": day,
        }))),
    }
}

/// Start (or restart) an entry's timer; body is optional
pub async fn start_timer(
    State(state): State<Arc<AppState>>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<i64>,
    command: Option<Json<StartCommand>>,
) -> Result<Json<Value>, ApiError> {
    let command = command.map(|Json(c)| c).unwrap_or_default();
    command.validate()?;

    let entry = state
        .db
        .get_entry(owner_id, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let started = timer::start(entry, command, clock::now_utc());
    let saved = state.db.save_entry(&started).await?;

    Ok(Json(json!({
        "message": "Timer started",
        "entry": saved,
    })))
}

/// Stop an entry's timer and mark the activity done
pub async fn stop_timer(
    State(state): State<Arc<AppState>>,
    AuthUser(owner_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let entry = state
        .db
        .get_entry(owner_id, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let stopped = timer::stop(entry, clock::now_utc());
    let saved = state.db.save_entry(&stopped).await?;

    Ok(Json(json!({
        "message": "Timer stopped and activity marked done",
        "entry": saved,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use crate::models::EntryStatus;
    use axum::response::IntoResponse;
    use sqlx::PgPool;

    async fn test_state(pool: PgPool) -> Arc<AppState> {
        Arc::new(AppState {
            db: Database::from_pool(pool).await.unwrap(),
            jwt_secret: "test-secret".to_string(),
        })
    }

    fn create_payload() -> CreatePayload {
        CreatePayload {
            day: Some("Senin".to_string()),
            start_time: Some("09:00".to_string()),
            end_time: None,
            activity: Some("Study".to_string()),
            category: Some("Academic".to_string()),
            timer_duration_minutes: None,
        }
    }

    #[tokio::test]
    async fn test_ping() {
        let result = ping().await;
        assert_eq!(result.0["message"], "Service is up");
    }

    #[sqlx::test]
    async fn test_create_entry_returns_created(pool: PgPool) {
        let state = test_state(pool).await;

        let (status, Json(entry)) =
            create_entry(State(state), AuthUser(1), Json(create_payload()))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry.owner_id, 1);
        assert_eq!(entry.status, EntryStatus::NotStarted);
    }

    #[sqlx::test]
    async fn test_create_entry_empty_body_is_unprocessable(pool: PgPool) {
        let state = test_state(pool).await;

        let err = create_entry(State(state), AuthUser(1), Json(CreatePayload::default()))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[sqlx::test]
    async fn test_foreign_entry_maps_to_not_found(pool: PgPool) {
        let state = test_state(pool).await;

        let (_, Json(entry)) =
            create_entry(State(Arc::clone(&state)), AuthUser(1), Json(create_payload()))
                .await
                .unwrap();

        // Another owner can neither read nor delete the entry; both surface
        // as 404 without revealing that it exists
        let err = get_entry(State(Arc::clone(&state)), AuthUser(2), Path(entry.id))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = delete_entry(State(Arc::clone(&state)), AuthUser(2), Path(entry.id))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        // The owner still sees it
        let found = get_entry(State(state), AuthUser(1), Path(entry.id)).await;
        assert!(found.is_ok());
    }
}
