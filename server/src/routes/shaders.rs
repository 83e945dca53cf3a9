//! Shader REST routes.

#[cfg(test)]
#[path = "shaders_test.rs"]
mod shaders_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::shader::{self, ShaderError, ShaderRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ShaderSummaryResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize)]
pub struct ShaderResponse {
    pub id: Uuid,
    pub name: String,
    pub source: String,
}

fn to_response(row: ShaderRow) -> ShaderResponse {
    ShaderResponse {
        id: row.id,
        name: row.name,
        source: row.source,
    }
}

#[derive(Deserialize)]
pub struct CreateShaderBody {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateShaderBody {
    pub name: Option<String>,
    pub source: Option<String>,
}

/// `GET /api/shaders`: list shader summaries.
pub async fn list_shaders(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShaderSummaryResponse>>, StatusCode> {
    let rows = shader::list_shaders(&state.pool)
        .await
        .map_err(shader_error_to_status)?;

    Ok(Json(
        rows.into_iter()
            .map(|row| ShaderSummaryResponse {
                id: row.id,
                name: row.name,
            })
            .collect(),
    ))
}

/// `POST /api/shaders`: create a shader seeded with the starter source.
pub async fn create_shader(
    State(state): State<AppState>,
    Json(body): Json<CreateShaderBody>,
) -> Result<(StatusCode, Json<ShaderResponse>), StatusCode> {
    let name = body.name.as_deref().unwrap_or(shader::DEFAULT_SHADER_NAME);
    let row = shader::create_shader(&state.pool, name)
        .await
        .map_err(shader_error_to_status)?;
    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// `GET /api/shaders/{id}`: fetch one shader document.
pub async fn get_shader(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShaderResponse>, StatusCode> {
    let row = shader::fetch_shader(&state.pool, id)
        .await
        .map_err(shader_error_to_status)?;
    Ok(Json(to_response(row)))
}

/// `PATCH /api/shaders/{id}`: update name and/or source.
pub async fn update_shader(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateShaderBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    shader::update_shader(&state.pool, id, body.name.as_deref(), body.source.as_deref())
        .await
        .map_err(shader_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `DELETE /api/shaders/{id}`: remove a shader.
pub async fn delete_shader(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    shader::delete_shader(&state.pool, id)
        .await
        .map_err(shader_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) fn shader_error_to_status(err: ShaderError) -> StatusCode {
    if matches!(err, ShaderError::Database(_)) {
        tracing::error!(error = %err, "shader storage failure");
    }
    match err {
        ShaderError::NotFound(_) => StatusCode::NOT_FOUND,
        ShaderError::InvalidName(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ShaderError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
