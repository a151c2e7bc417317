pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::RosterConfig;
pub use core::{OutputFormat, Roster};
pub use domain::model::{Address, Employee, EmployeeBuilder, EmployeeRecord};
pub use utils::error::{RecordError, Result};
