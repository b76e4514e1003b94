// src/config/mod.rs
pub mod consts;
pub mod options;

pub use options::{Markers, Options, OutputMode, SourceOptions, TermSelector};
