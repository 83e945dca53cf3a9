//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade into toasts and inline messages without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ShaderDoc, ShaderSummary};

#[cfg(any(test, feature = "hydrate"))]
const SHADERS_ENDPOINT: &str = "/api/shaders";

#[cfg(any(test, feature = "hydrate"))]
fn shader_endpoint(id: &str) -> String {
    format!("/api/shaders/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch all shader summaries from `GET /api/shaders`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn list_shaders() -> Result<Vec<ShaderSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SHADERS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("list shaders", resp.status()));
        }
        resp.json::<Vec<ShaderSummary>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a shader via `POST /api/shaders`, returning the new document.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn create_shader(name: &str) -> Result<ShaderDoc, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        let resp = gloo_net::http::Request::post(SHADERS_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create shader", resp.status()));
        }
        resp.json::<ShaderDoc>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Fetch one shader document from `GET /api/shaders/{id}`.
/// Returns `None` if the shader is missing or on the server.
pub async fn fetch_shader(id: &str) -> Option<ShaderDoc> {
    #[cfg(feature = "hydrate")]
    {
        let url = shader_endpoint(id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ShaderDoc>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Save name and source via `PATCH /api/shaders/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn update_shader(id: &str, name: &str, source: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "source": source });
        let resp = gloo_net::http::Request::patch(&shader_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("save shader", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, name, source);
        Err("not available on server".to_owned())
    }
}

/// Delete a shader via `DELETE /api/shaders/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn delete_shader(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&shader_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete shader", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
