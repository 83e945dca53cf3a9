use super::*;

#[test]
fn shaders_endpoint_is_collection_path() {
    assert_eq!(SHADERS_ENDPOINT, "/api/shaders");
}

#[test]
fn shader_endpoint_formats_expected_path() {
    assert_eq!(shader_endpoint("s123"), "/api/shaders/s123");
}

#[test]
fn request_failed_message_formats_action_and_status() {
    assert_eq!(
        request_failed_message("list shaders", 500),
        "list shaders failed: 500"
    );
    assert_eq!(
        request_failed_message("save shader", 422),
        "save shader failed: 422"
    );
}
