pub mod catalog;
pub mod context;
pub mod error;
pub mod executor;
pub mod planner;
pub mod platform;
pub mod store;

pub use error::{Error, Result};
