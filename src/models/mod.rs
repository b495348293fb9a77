pub mod error;
pub mod task;
pub mod theme;
