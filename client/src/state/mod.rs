//! Application state shared via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules own in-memory session data so pages and components read
//! one source of truth provided at the application shell root.

pub mod session;
