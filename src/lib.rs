#[macro_use]
extern crate lazy_static;

pub mod algos;
pub mod constants;
pub mod error;
pub mod shell;
pub mod structs;
pub mod telemetry;
pub mod traits;
pub mod utils;
