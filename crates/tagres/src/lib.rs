//! # tagres
//!
//! Build `{ type, data }` values whose tag says whether an operation
//! succeeded, and which payload shape to expect.
//!
//! ```rust
//! use tagres::{ErrorKind, err_tagged, ok, ok_tagged};
//!
//! let done = ok(42);
//! assert_eq!(done.tag(), "SUCCESS");
//!
//! let created = ok_tagged("USER_CREATED", "alice").unwrap();
//! assert_eq!(created.tag(), "SUCCESS_USER_CREATED");
//!
//! let rejected = err_tagged("", ()).unwrap_err();
//! assert_eq!(rejected.kind(), ErrorKind::EmptyTag);
//! ```
//!
//! Runtime tags compare as plain strings. To let the compiler tie a tag to its
//! payload type, declare marker types with [`define_tag!`] and group them with
//! [`tagged_union!`]; a `match` on the union then yields each payload at its
//! own type.

pub use tagres_core::{
    ERROR, ErrorResult, Failure, Outcome, ResultTag, SEPARATOR, SUCCESS, Success, SuccessResult,
    Tag, Tagged, TaggedResult, define_tag, err, err_tagged, ok, ok_tagged, tagged_union,
};
pub use tagres_error::{Error, ErrorKind, Result};
