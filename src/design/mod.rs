pub mod component;
pub mod defaults;
pub mod element_model;
pub mod properties;
