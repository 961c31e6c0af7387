#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod entry;
mod error;
mod exercise_list;
mod program;
mod service;

pub use catalog::*;
pub use entry::*;
pub use error::*;
pub use exercise_list::*;
pub use program::*;
pub use service::*;
