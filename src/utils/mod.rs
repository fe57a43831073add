//! Utility modules for common functionality
//!
//! This module provides logging, configuration and string helpers used by
//! the command-line front end.

pub mod logger;
pub mod config;
pub(crate) mod string_utils;
