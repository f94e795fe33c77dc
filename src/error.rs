//=========================================================================
// Error Types
//=========================================================================
//
// One error enum per subsystem, wrapped by `EngineError` at the top.
//
// None of these are recovered from: the binary logs the error and exits.
// Missing images are the exception and never surface here as fatal; the
// scenes log and skip them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== ConfigError =========================================================

/// Configuration file and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

//=== RenderError =========================================================

/// Canvas and image errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The vector-graphics backend refused an operation.
    #[error("canvas backend error: {0}")]
    Backend(#[from] femtovg::ErrorKind),

    /// An image file could not be loaded into the canvas.
    #[error("failed to load image {path}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },
}

//=== PlatformError =======================================================

/// Window, GL context and event loop errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// The event loop terminated with an error.
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    /// No window or no matching GL config could be created.
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("window handle unavailable: {0}")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    #[error("OpenGL error: {0}")]
    Gl(#[from] glutin::error::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

//=== EngineError =========================================================

/// Top-level error returned by [`crate::Engine::run`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=========================================================================
// Unit Tests
//=========================================================================
