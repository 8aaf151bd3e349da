pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod remote;
pub mod ui;

pub use error::{Result, SemvError};
