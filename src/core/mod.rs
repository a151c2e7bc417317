pub mod roster;

pub use roster::{OutputFormat, Roster};
