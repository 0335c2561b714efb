//! # tagres-error
//!
//! Usage errors for the tagres constructors.
//!
//! Building a tagged value cannot fail at runtime except through misuse, such
//! as an empty tag suffix. Those cases surface as an [`Error`] carrying:
//!
//! - **ErrorKind**: what went wrong (e.g., EmptyTag, InvalidArgument)
//! - **Operation**: which constructor rejected the input
//! - **Context**: the offending values, as key-value pairs
//!
//! ## Usage
//!
//! ```rust
//! use tagres_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::EmptyTag, "tag suffix must not be empty")
//!         .with_operation("tagres::ok_tagged")
//!         .with_context("outcome", "SUCCESS"))
//! }
//! ```
//!
//! ## Principles
//!
//! - Fallible constructors return `Result<T, tagres_error::Error>`
//! - Errors are raised once, at the call that received the bad input
//! - Failures of the caller's own workflow belong in an `err(...)` value, not here

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the tagres Error
pub type Result<T> = std::result::Result<T, Error>;
