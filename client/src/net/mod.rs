//! Networking modules for the marketplace backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the backend's envelope endpoints; `types` defines the wire
//! DTOs that are client-only (shared session/auth DTOs live in `gate`).

pub mod api;
pub mod types;
