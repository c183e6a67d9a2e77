pub mod data;
pub mod models;

pub use data::*;
pub use models::*;
