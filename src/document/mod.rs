//! The in-memory value tree and its conversion to and from serde_yaml.

pub mod convert;
pub mod value;
