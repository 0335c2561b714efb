//! Error kinds for tagres operations

use strum_macros::Display;

/// The kind of error that occurred.
///
/// Callers match on ErrorKind to tell a bad tag suffix apart from a
/// malformed discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A custom tag suffix was empty, or nothing was left of it once the
    /// redundant default prefix was removed
    EmptyTag,

    /// Invalid argument passed to function
    InvalidArgument,
}
