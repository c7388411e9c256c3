pub mod analyze;
pub mod classify;
pub mod display;
pub mod extract;
pub mod measure;
