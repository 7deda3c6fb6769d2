pub mod backend;
pub mod container;
pub mod format;
pub mod manager;
