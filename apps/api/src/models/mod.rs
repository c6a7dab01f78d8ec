pub mod catalog;
pub mod guide;
