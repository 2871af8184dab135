//! Domain services used by the edge guard and HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own upstream-communication concerns so route handlers
//! and middleware can stay focused on protocol translation.

pub mod backend;
