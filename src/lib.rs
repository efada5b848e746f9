//! Check and complete multiplication tables into group tables

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub use crate::solve::{Completions, SearchBudget, Status};
pub use crate::table::{Element, MulTable};

pub mod error;
pub mod solve;
pub mod table;

mod collections;
