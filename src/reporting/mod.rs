//! Reporting and structured logging
//!
//! This module handles logger initialization and the structured log
//! helpers used across the application.

pub mod logging;
