//! Document model for artboards, scene nodes and shared resources

pub mod types;

pub use types::*;
