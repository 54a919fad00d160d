//! Command handlers for the `teaeffect` binary.
//!
//! - **calculate**: score tea records and print their effect profiles as JSON
//! - **init**: write a default `.teaeffect.toml`

pub mod calculate;
pub mod init;

pub use calculate::{handle_calculate, CalculateConfig};
pub use init::init_config;
