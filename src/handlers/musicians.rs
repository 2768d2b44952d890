use crate::dtos::{CreateMusician, MusicianResponse, UpdateMusician};
use crate::error::AppError;
use crate::models::Musician;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde_json::json;
use validator::Validate;

fn parse_musician_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid musician id")))
}

pub async fn list_musicians(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let musicians = state
        .db
        .find_all()
        .await
        .map_err(|e| AppError::store("Failed to fetch musicians", e))?;

    let body: Vec<MusicianResponse> = musicians.into_iter().map(MusicianResponse::from).collect();
    Ok(Json(body))
}

pub async fn create_musician(
    State(state): State<AppState>,
    Json(payload): Json<CreateMusician>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let musician = Musician::from(payload);
    state
        .db
        .insert(&musician)
        .await
        .map_err(|e| AppError::store("Failed to create musician", e))?;

    tracing::info!(musician_id = %musician.id, "Musician created");
    Ok((StatusCode::CREATED, Json(MusicianResponse::from(musician))))
}

pub async fn get_musician(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_musician_id(&id)?;

    let musician = state
        .db
        .find_by_id(id)
        .await
        .map_err(|e| AppError::store("Failed to fetch musician", e))?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Musician not found")))?;

    Ok(Json(MusicianResponse::from(musician)))
}

pub async fn update_musician(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMusician>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let id = parse_musician_id(&id)?;

    // A body naming no fields is a no-op update; the record is returned as-is.
    let musician = match payload.update_document() {
        Some(update) => state
            .db
            .update_by_id(id, update)
            .await
            .map_err(|e| AppError::store("Failed to update musician", e))?,
        None => state
            .db
            .find_by_id(id)
            .await
            .map_err(|e| AppError::store("Failed to update musician", e))?,
    }
    .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Musician not found")))?;

    tracing::info!(musician_id = %musician.id, "Musician updated");
    Ok(Json(MusicianResponse::from(musician)))
}

pub async fn delete_musician(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_musician_id(&id)?;

    let musician = state
        .db
        .delete_by_id(id)
        .await
        .map_err(|e| AppError::store("Failed to delete musician", e))?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Musician not found")))?;

    tracing::info!(musician_id = %musician.id, "Musician deleted");
    Ok(Json(json!({ "message": "Musician deleted successfully" })))
}
