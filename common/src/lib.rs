pub mod config;
pub mod games;
pub mod id_generator;
pub mod identifiers;
pub mod lobby;
pub mod logger;

pub use identifiers::*;
