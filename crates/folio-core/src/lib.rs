//! Folio core crate.
//!
//! This crate intentionally keeps the data semantics separate from any I/O
//! or markup concern:
//!
//! - `model`: the loosely-typed project record contract and the pure
//!   default-resolution step that produces fully-defaulted card views.
//! - `order`: effective-date derivation and newest-first ordering.
//!
//! The critical design rule is totality: every record field has a defined
//! fallback, resolution never fails, and ordering never mutates its input.

pub mod model;
pub mod order;

pub use model::{
    Project, ProjectLink, ResolvedAction, ResolvedCard, DEFAULT_LINK_ICON, DEFAULT_LINK_LABEL,
    DEFAULT_LINK_URL, PLACEHOLDER_IMAGE, PRIMARY_ACTION_LABELS,
};
pub use order::{effective_timestamp_ms, sort_newest_first};
