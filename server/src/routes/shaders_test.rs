use super::*;

#[test]
fn shader_error_to_status_maps_not_found() {
    let err = ShaderError::NotFound(Uuid::nil());
    assert_eq!(shader_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn shader_error_to_status_maps_invalid_name() {
    let err = ShaderError::InvalidName("name is empty".to_owned());
    assert_eq!(shader_error_to_status(err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn shader_error_to_status_maps_database_failure() {
    let err = ShaderError::from(sqlx::Error::RowNotFound);
    assert_eq!(shader_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn to_response_preserves_row_fields() {
    let id = Uuid::new_v4();
    let row = ShaderRow {
        id,
        name: "Plasma".to_owned(),
        source: "@fragment".to_owned(),
    };
    let response = to_response(row);
    assert_eq!(response.id, id);
    assert_eq!(response.name, "Plasma");
    assert_eq!(response.source, "@fragment");
}

#[test]
fn create_body_accepts_missing_name() {
    let body: CreateShaderBody = serde_json::from_str("{}").unwrap();
    assert!(body.name.is_none());
}

#[test]
fn create_body_accepts_explicit_name() {
    let body: CreateShaderBody = serde_json::from_str(r#"{"name":"Waves"}"#).unwrap();
    assert_eq!(body.name.as_deref(), Some("Waves"));
}

#[test]
fn update_body_accepts_partial_fields() {
    let body: UpdateShaderBody = serde_json::from_str(r#"{"source":"// wip"}"#).unwrap();
    assert!(body.name.is_none());
    assert_eq!(body.source.as_deref(), Some("// wip"));
}

#[test]
fn shader_summary_serializes_id_and_name() {
    let id = Uuid::new_v4();
    let summary = ShaderSummaryResponse {
        id,
        name: "Noise".to_owned(),
    };
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["id"], serde_json::json!(id));
    assert_eq!(json["name"], "Noise");
}
