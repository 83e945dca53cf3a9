//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's JSON payloads so list and
//! editor state can deserialize responses without adapter layers. Ids stay
//! strings on this side; only the server parses them as UUIDs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// List entry returned by `GET /api/shaders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderSummary {
    /// Unique shader identifier (UUID string).
    pub id: String,
    /// Display name shown on library cards.
    pub name: String,
}

/// Full shader document returned by the fetch and create endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderDoc {
    /// Unique shader identifier (UUID string).
    pub id: String,
    /// Display name, 1 to 80 characters after trimming.
    pub name: String,
    /// Opaque fragment shader source text; the server never parses it.
    pub source: String,
}
