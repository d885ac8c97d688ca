//! # mkvtags Bench
//!
//! Benchmarking utilities for mkvtags registry lookups.

pub mod workload;
