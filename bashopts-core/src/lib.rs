#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
//! Building blocks of the bashopts generator.
//!
//! This crate provides the option descriptor ([`Spec`]) together with the parser for its compact
//! textual form, and the [`Lines`] buffer that the generator assembles bash code in.

mod error;
pub use error::{Error, Result};
pub mod lines;
pub use lines::{Line, Lines};
pub mod spec;
pub use spec::{Kind, Spec};
