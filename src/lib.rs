//! Look up the closest public holiday from the Nager.Date API and estimate
//! how long the break around it lasts.

pub mod app;
pub mod config;
pub mod employees;
pub mod error;
pub mod holiday;
pub mod prompt;
pub mod report;
pub mod source;
pub mod window;
