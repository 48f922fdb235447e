// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edit and difference algorithms over text.
//!
//! - `one_away`: are two texts at most one insertion, deletion or substitution apart?
//! - `runs`: maximal runs of identical consecutive characters
//! - `compression`: run-length compression built on `runs`

pub mod compression;
pub mod one_away;
pub mod runs;

pub use compression::{compress, compress_text};
pub use one_away::is_one_away;
pub use runs::{runs, Run, Runs};

pub(crate) const TRACE_TARGET: &str = "arrays_and_strings::edit";
