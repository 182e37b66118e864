//! Domain services used by HTTP routes and the operation dispatcher.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and persistence concerns so route handlers
//! can stay focused on protocol translation.

pub mod painting;
pub mod painting_memory;
pub mod painting_pg;
