//! Filesystem utilities for nichepost.

pub mod atomic;

pub use atomic::atomic_write_file;
