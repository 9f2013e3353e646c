pub mod color;
pub mod dart;
pub mod flutter;
pub mod mapping;
pub mod options;
pub mod widgets;
