//! Domain types for the labyrinth wiki.
//!
//! This module provides:
//! - Identifier and attribution primitives: CellId, Source
//! - The Cell card and its create/update inputs
//! - Derived read models: CellLink, CollectionOfCells

pub mod cell;
pub mod primitives;

pub use cell::{Cell, CellDraft, CellLink, CellUpdate, CollectionOfCells};
pub use primitives::{CellId, Source};
