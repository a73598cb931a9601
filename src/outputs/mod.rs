//! Output generation.
//!
//! The pipeline produces one artifact per run: a CSV snapshot of every
//! project record discovered across the archive, written by [`csv`].

pub mod csv;
