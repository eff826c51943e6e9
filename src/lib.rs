//! Conversation viewer library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod sample_data;
pub mod state;
pub mod ui;
