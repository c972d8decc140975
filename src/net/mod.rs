pub mod fetch;
pub mod catalog;
pub mod image;
