//! Report formatters

pub mod human;

pub use human::HumanFormatter;
