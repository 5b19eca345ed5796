//! Configuration loading for the paid leave engine.
//!
//! This module provides functionality to load the employer leave policy
//! (company limit parameters) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use paid_leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::LeavePolicy;
