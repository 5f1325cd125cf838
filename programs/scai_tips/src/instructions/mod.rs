pub mod admin;
pub mod paper;
pub mod tip;
