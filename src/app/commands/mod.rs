pub mod catalog;
pub mod generate;
pub mod interactive;
