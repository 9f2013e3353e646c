pub mod error;
pub mod pending;
#[allow(clippy::module_inception)]
pub mod workspace;
