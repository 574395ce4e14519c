//! Global error handling for ctxcat
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for ctxcat operations
#[derive(Error, Debug)]
pub enum CtxError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Clipboard-related errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for ctxcat operations
pub type Result<T> = std::result::Result<T, CtxError>;
