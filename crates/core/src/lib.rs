//! Employee management core types.
//!
//! Shared by the web binary and the command-line tools:
//! - `web` - Administrator registration/login and the employee listing
//! - `cli` - Migrations and administrator provisioning
//!
//! The core crate holds plain types only. No I/O, no database access and no
//! HTTP, so it can be pulled into anything.
//!
//! # Modules
//!
//! - [`types`] - Type-safe entity IDs and the validated mail address

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
