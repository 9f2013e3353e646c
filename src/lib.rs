pub mod chat;
pub mod cli;
pub mod codegen;
pub mod design;
pub mod history;
pub mod script;
pub mod workspace;
