//! Core substrate for agents: model gateway, configuration resolution
//! and the tool registry.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod config;
mod gateway;
pub mod tool;

pub use config::{ConfigError, GatewayConfig};
pub use gateway::{ChatError, ModelGateway};
pub use tool::{Handler, Registry as ToolRegistry, Tool};
