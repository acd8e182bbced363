pub mod business;
pub mod collections;
pub mod formatting;
pub mod guards;
pub mod objects;
pub mod timing;

pub use crate::utils::error::Result;
