//! WireDraft Core Library
//!
//! UI-toolkit-agnostic document model and editing logic for the WireDraft
//! mockup designer: components, the design document with selection and
//! snapshot undo/redo, alignment and layout algorithms, and the persisted
//! JSON format with autosave recovery.

pub mod align;
pub mod components;
pub mod document;
pub mod history;
pub mod schema;
pub mod storage;

pub use align::{
    align, alignment_guides, arrange, distribute, snap_to_grid, snap_to_siblings, Alignment,
    AlignmentGuide, Arrangement, Distribution, GuideOrientation, ARRANGE_GAP, GRID_SIZE,
    SNAP_THRESHOLD,
};
pub use components::{
    Button, Component, ComponentId, ComponentTrait, ComponentType, FontWeight, Group, InputField,
    Rectangle, Style, TextAlign, TextLabel, CLONE_OFFSET, MIN_COMPONENT_SIZE,
};
pub use document::DesignDocument;
pub use history::{History, MAX_HISTORY};
pub use schema::{ComponentRecord, DesignData, DESIGN_VERSION};
pub use storage::{
    load_design, save_design, AutoSaveManager, RecoveredDesign, SaveFile, SaveMetadata,
    StorageError, StorageResult,
};
