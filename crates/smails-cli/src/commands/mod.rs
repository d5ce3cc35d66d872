//! CLI command implementations

pub mod build;
pub mod init;
pub mod list;
pub mod render;
pub mod validate;
