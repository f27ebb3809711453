//! Learning progress tracker.
//!
//! Students are registered in a [`model::Roster`], earn points in a fixed set
//! of courses, and get notified once when they complete a course. The
//! [`Tracker`] ties these together and [`Shell`] drives it from text input.

pub mod checks;
pub mod config;
pub mod display;
pub mod errors;
pub mod model;
pub mod notify;
pub mod points;
pub mod shell;
pub mod stats;
mod tracker;

pub use self::shell::Shell;
pub use self::tracker::Tracker;
