//! Checks that a MongoDB deployment is reachable by connecting with the official driver and
//! running `ping`.

pub mod health;
pub mod interface_types;
pub mod mongodb;
pub mod mongodb_connection;
pub mod state;

pub use health::{probe, Outcome};
pub use interface_types::{ConnectionAttempt, ProbeError};
