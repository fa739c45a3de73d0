//! API request handlers

mod anomalies;
mod data;
mod status;

pub use anomalies::*;
pub use data::*;
pub use status::*;
