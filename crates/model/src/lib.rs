//! An abstraction layer for chat-completion models.
//!
//! This crate establishes the protocol between the model gateway and the
//! remote transports it delegates to, so that the gateway can switch
//! between providers without modifying the core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
