//! I/O helpers for exporting sampled fields and analysis results.

pub mod csv;

pub use csv::*;
