//! Project name generation
//!
//! Greek-letter prefixes and the hyphen-joined project names built on them.

mod assemble;
mod prefix;

pub(crate) use assemble::{assemble, normalize_suffix, split_keywords};
pub(crate) use prefix::prefix_for;
