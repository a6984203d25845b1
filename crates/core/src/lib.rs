#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod model;

pub use error::ContentError;
