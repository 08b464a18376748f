//! Error types for the showcase
//!
//! Only startup can fail in a way the caller has to see. Everything that goes
//! wrong mid-frame is logged and the frame is skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bringing up the window, GPU and assets
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("failed to load model {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("model {0} contains no geometry")]
    EmptyModel(PathBuf),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
