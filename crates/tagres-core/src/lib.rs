#[macro_use]
mod macros;
pub mod outcome;
pub mod result;
pub mod tag;
pub mod typed;

pub use outcome::{ERROR, Outcome, SEPARATOR, SUCCESS};
pub use paste;
pub use result::{TaggedResult, err, err_tagged, ok, ok_tagged};
pub use tag::Tag;
pub use tagres_error::{Error, ErrorKind, Result};
pub use typed::{ErrorResult, Failure, ResultTag, Success, SuccessResult, Tagged};
