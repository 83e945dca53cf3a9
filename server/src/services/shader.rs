//! Shader service: CRUD over the `shaders` table.
//!
//! DESIGN
//! ======
//! Shader source is opaque text end to end: the service validates names,
//! assigns ids, and keeps `updated_at` current so the library lists the
//! most recent work first. Nothing here parses, compiles, or renders
//! shader code.

#[cfg(test)]
#[path = "shader_test.rs"]
mod shader_test;

use sqlx::PgPool;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

/// Name given to shaders created without one.
pub const DEFAULT_SHADER_NAME: &str = "Untitled Shader";

/// Longest accepted shader name, in characters, after trimming.
pub const MAX_NAME_CHARS: usize = 80;

/// Starter fragment source seeded into newly created shaders.
pub const STARTER_SHADER_SOURCE: &str = "\
// Fragment shader
// uv is normalized to [0, 1] over the viewport.
@fragment
fn main(@builtin(position) pos: vec4<f32>) -> @location(0) vec4<f32> {
    let uv = pos.xy / vec2<f32>(1920.0, 1080.0);
    return vec4<f32>(uv, 0.5, 1.0);
}
";

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("shader not found: {0}")]
    NotFound(Uuid),
    #[error("invalid shader name: {0}")]
    InvalidName(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from shader document queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderRow {
    pub id: Uuid,
    pub name: String,
    pub source: String,
}

/// List entry without the source payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSummaryRow {
    pub id: Uuid,
    pub name: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Normalize and validate a shader name.
///
/// # Errors
///
/// Returns [`ShaderError::InvalidName`] when the trimmed name is empty or
/// longer than [`MAX_NAME_CHARS`] characters.
pub fn validate_name(raw: &str) -> Result<String, ShaderError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ShaderError::InvalidName("name is empty".to_owned()));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ShaderError::InvalidName(format!(
            "name exceeds {MAX_NAME_CHARS} characters"
        )));
    }
    Ok(name.to_owned())
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a new shader seeded with the starter source.
///
/// # Errors
///
/// Returns an invalid-name error or a database error if the insert fails.
pub async fn create_shader(pool: &PgPool, name: &str) -> Result<ShaderRow, ShaderError> {
    let name = validate_name(name)?;
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO shaders (id, name, source) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(&name)
        .bind(STARTER_SHADER_SOURCE)
        .execute(pool)
        .await?;

    tracing::info!(shader_id = %id, "shader created");

    Ok(ShaderRow {
        id,
        name,
        source: STARTER_SHADER_SOURCE.to_owned(),
    })
}

/// List shader summaries, most recently updated first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_shaders(pool: &PgPool) -> Result<Vec<ShaderSummaryRow>, ShaderError> {
    let rows = sqlx::query_as::<_, (Uuid, String)>(
        "SELECT id, name
         FROM shaders
         ORDER BY updated_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ShaderSummaryRow { id, name })
        .collect())
}

/// Fetch one shader document.
///
/// # Errors
///
/// Returns `NotFound` for unknown ids or a database error if the query
/// fails.
pub async fn fetch_shader(pool: &PgPool, id: Uuid) -> Result<ShaderRow, ShaderError> {
    let row = sqlx::query_as::<_, (Uuid, String, String)>(
        "SELECT id, name, source FROM shaders WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(ShaderError::NotFound(id))?;

    Ok(ShaderRow {
        id: row.0,
        name: row.1,
        source: row.2,
    })
}

/// Update name and/or source; omitted fields keep their stored values.
///
/// # Errors
///
/// Returns an invalid-name error, `NotFound` for unknown ids, or a database
/// error if the update fails.
pub async fn update_shader(
    pool: &PgPool,
    id: Uuid,
    name: Option<&str>,
    source: Option<&str>,
) -> Result<(), ShaderError> {
    let name = name.map(validate_name).transpose()?;
    let result = sqlx::query(
        "UPDATE shaders
         SET name = COALESCE($2, name),
             source = COALESCE($3, source),
             updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(name)
    .bind(source)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ShaderError::NotFound(id));
    }
    Ok(())
}

/// Delete a shader.
///
/// # Errors
///
/// Returns `NotFound` for unknown ids or a database error if the delete
/// fails.
pub async fn delete_shader(pool: &PgPool, id: Uuid) -> Result<(), ShaderError> {
    let result = sqlx::query("DELETE FROM shaders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ShaderError::NotFound(id));
    }

    tracing::info!(shader_id = %id, "shader deleted");
    Ok(())
}
