//! Per-directory index tracking
//!
//! The store is loaded once, advanced at most once per target directory, and
//! written back in full after a successful run.

mod file;
mod index;

pub(crate) use file::StateFile;
pub(crate) use index::{IndexStore, StateEntry};
