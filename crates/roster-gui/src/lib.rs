//! Student Roster Studio - GUI Library
//!
//! This module provides the core application types and modules for the
//! Student Roster Studio desktop application.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod constants;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

// Service modules for background tasks
pub mod service;
