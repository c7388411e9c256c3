pub mod calibration;
pub mod cloud;
pub mod error;
pub mod math;
pub mod operations;
pub mod report;
pub mod session;

pub use error::{FootfitError, Result};
