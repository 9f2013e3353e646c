pub mod store;
pub mod timeline;
