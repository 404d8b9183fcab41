//! Platform collaborator seams.
//!
//! Implementations live in the embedding application (rendering surface,
//! OS permission dialogs, platform directories). Traits are object-safe so
//! the coordinator can hold them as `Arc<dyn ...>`; infrastructure failures
//! surface as `anyhow::Error` and are mapped by the coordinator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Outcome of a storage write-access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
}

/// Quality/format settings for a capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Raster quality in `0.0..=1.0`.
    pub quality: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { quality: 1.0 }
    }
}

/// Confirms the process may write to storage.
///
/// On platforms where the target directory is app-private this is a no-op
/// that answers [`Permission::Granted`] without prompting.
#[async_trait::async_trait]
pub trait PermissionBroker: Send + Sync {
    async fn request_write_access(&self) -> Permission;
}

/// Produces a rasterized snapshot of the current visual state, written to a
/// temporary location. Fallible: the rendering surface may not be ready.
#[async_trait::async_trait]
pub trait CaptureService: Send + Sync {
    async fn capture(&self, config: &CaptureConfig) -> anyhow::Result<PathBuf>;
}

/// Wraps raster images into a paginated document at `output` (a single page
/// in this domain, but the page list stays ordered).
#[async_trait::async_trait]
pub trait DocumentAssembler: Send + Sync {
    async fn assemble(&self, pages: &[PathBuf], output: &Path) -> anyhow::Result<()>;
}

/// Byte copy plus resolution of the platform's default write location.
#[async_trait::async_trait]
pub trait StorageFs: Send + Sync {
    async fn copy(&self, src: &Path, dst: &Path) -> anyhow::Result<()>;

    /// Platform-appropriate documents/downloads directory.
    fn documents_dir(&self) -> anyhow::Result<PathBuf>;
}
