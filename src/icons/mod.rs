pub mod catalog;
pub mod maki;
