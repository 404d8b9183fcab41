//! Export orchestration.
//!
//! One strict sequence per export, early abort on any failed step:
//!
//! ```text
//! readiness gate
//!   -> permission check
//!   -> capture to a temporary raster file
//!   -> resolve destination (documents dir + derived filename)
//!   -> copy (image) | assemble single-page document (pdf)
//! ```
//!
//! There is no timeout, no cancellation and no retry; a failed export is
//! re-initiated by the user. A cooperative in-flight flag rejects a second
//! export while one is running and is cleared on every exit path.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use cashmemo_document::{InvoiceDocument, is_export_ready};

use crate::collaborators::{
    CaptureConfig, CaptureService, DocumentAssembler, Permission, PermissionBroker, StorageFs,
};
use crate::filename::export_file_name;

/// The two export artifact shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Rasterized page image, copied verbatim to the destination.
    Image,
    /// Single-page document wrapping the captured raster.
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Image => "png",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Export pipeline failure.
///
/// Underlying causes are logged, never shown verbatim; the UI presents
/// [`ExportError::user_notice`] instead. Nothing here is fatal; every
/// variant returns control to an editable, consistent document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The readiness gate failed; no collaborator was called.
    #[error("document is not ready for export")]
    NotExportReady,

    /// Another export is still running (cooperative exclusion).
    #[error("an export is already in progress")]
    InProgress,

    /// The permission broker denied storage write access.
    #[error("storage write access denied")]
    PermissionDenied,

    /// The rendering collaborator failed to produce a snapshot.
    #[error("capture failed: {0}")]
    Capture(anyhow::Error),

    /// Destination resolution or the terminal write step failed.
    #[error("export failed: {0}")]
    Export(anyhow::Error),
}

impl ExportError {
    /// Generic user-facing notice for this failure. Validation notices are
    /// transient inline messages; the rest are modal.
    pub fn user_notice(&self) -> &'static str {
        match self {
            ExportError::NotExportReady => {
                "Fill in customer name, bill date, payment mode and at least one item."
            }
            ExportError::InProgress => "An export is already running.",
            ExportError::PermissionDenied => {
                "Storage permission is required to save the cash memo."
            }
            ExportError::Capture(_) => "Could not capture the cash memo. Please try again.",
            ExportError::Export(_) => "Could not save the cash memo. Please try again.",
        }
    }
}

/// Drives the export protocol against the platform collaborators.
pub struct ExportCoordinator {
    permissions: Arc<dyn PermissionBroker>,
    capture: Arc<dyn CaptureService>,
    assembler: Arc<dyn DocumentAssembler>,
    fs: Arc<dyn StorageFs>,
    capture_config: CaptureConfig,
    in_flight: AtomicBool,
}

impl ExportCoordinator {
    pub fn new(
        permissions: Arc<dyn PermissionBroker>,
        capture: Arc<dyn CaptureService>,
        assembler: Arc<dyn DocumentAssembler>,
        fs: Arc<dyn StorageFs>,
    ) -> Self {
        Self {
            permissions,
            capture,
            assembler,
            fs,
            capture_config: CaptureConfig::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_capture_config(mut self, config: CaptureConfig) -> Self {
        self.capture_config = config;
        self
    }

    /// Whether an export is currently running. Drives the UI affordances.
    pub fn is_exporting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Export the memo as a raster page image. Returns the final path.
    pub async fn export_as_image(
        &self,
        document: &InvoiceDocument,
    ) -> Result<PathBuf, ExportError> {
        self.run(document, ExportFormat::Image).await
    }

    /// Export the memo as a single-page document. Returns the final path.
    pub async fn export_as_document(
        &self,
        document: &InvoiceDocument,
    ) -> Result<PathBuf, ExportError> {
        self.run(document, ExportFormat::Pdf).await
    }

    async fn run(
        &self,
        document: &InvoiceDocument,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        let _in_flight = InFlightGuard::acquire(&self.in_flight)?;

        if !is_export_ready(document) {
            return Err(ExportError::NotExportReady);
        }

        info!(format = format.extension(), "export started");

        if self.permissions.request_write_access().await == Permission::Denied {
            info!("export aborted: storage permission denied");
            return Err(ExportError::PermissionDenied);
        }

        let captured = self
            .capture
            .capture(&self.capture_config)
            .await
            .map_err(|cause| {
                error!(%cause, "capture failed");
                ExportError::Capture(cause)
            })?;

        let destination = self
            .fs
            .documents_dir()
            .map_err(|cause| {
                error!(%cause, "could not resolve documents directory");
                ExportError::Export(cause)
            })?
            .join(export_file_name(document, format.extension()));

        // A repeated export with the same customer and date overwrites the
        // earlier file; collisions are not checked.
        let write = match format {
            ExportFormat::Image => self.fs.copy(&captured, &destination).await,
            ExportFormat::Pdf => {
                self.assembler
                    .assemble(std::slice::from_ref(&captured), &destination)
                    .await
            }
        };
        write.map_err(|cause| {
            error!(%cause, "export write failed");
            ExportError::Export(cause)
        })?;

        info!(path = %destination.display(), "export finished");
        Ok(destination)
    }
}

/// Cooperative exclusion: set on entry, cleared on drop so no exit path can
/// leave the UI permanently disabled.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ExportError> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ExportError::InProgress);
        }
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_match_the_artifact_shapes() {
        assert_eq!(ExportFormat::Image.extension(), "png");
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
    }

    #[test]
    fn user_notices_never_leak_the_underlying_cause() {
        let err = ExportError::Capture(anyhow::anyhow!("surface not ready: 0x7f"));
        assert!(!err.user_notice().contains("0x7f"));

        let err = ExportError::Export(anyhow::anyhow!("ENOSPC"));
        assert!(!err.user_notice().contains("ENOSPC"));
    }

    #[test]
    fn in_flight_guard_clears_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let _guard = InFlightGuard::acquire(&flag).unwrap();
            assert!(flag.load(Ordering::Acquire));
            assert!(matches!(
                InFlightGuard::acquire(&flag),
                Err(ExportError::InProgress)
            ));
        }
        assert!(!flag.load(Ordering::Acquire));
    }
}
