//! Rule configuration file parsing

pub mod rules_json;

pub use rules_json::{Config, RulesConfig};
