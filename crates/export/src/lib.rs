//! Export layer: filename derivation and the capture/assemble/write pipeline.
//!
//! The rendering surface, document assembler, filesystem and permission
//! broker are platform collaborators behind traits; this crate contains the
//! orchestration and no platform IO of its own.

pub mod collaborators;
pub mod coordinator;
pub mod filename;


pub use collaborators::{
    CaptureConfig, CaptureService, DocumentAssembler, Permission, PermissionBroker, StorageFs,
};
pub use coordinator::{ExportCoordinator, ExportError, ExportFormat};
pub use filename::export_file_name;
