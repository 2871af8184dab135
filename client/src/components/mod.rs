//! Reusable UI components.

pub mod job_card;
