//! An out-of-the-box agent substrate that assembles the model gateway and
//! the built-in tools.
//!
//! The crate includes a CLI tool for trying things out in the terminal.
//! And you can also use it as a library to hand a ready-made gateway and
//! tool registry to your own agent loop.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod action;
mod scout;

pub use action::{observation_message, parse_action};
pub use scout::{Scout, ScoutBuilder};

/// Re-exports of [`scout_core`] crate.
pub mod core {
    pub use scout_core::*;
}

/// Re-exports of [`scout_search`] crate.
pub mod search {
    pub use scout_search::*;
}
