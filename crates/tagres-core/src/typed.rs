//! Tags lifted into the type system.
//!
//! A marker type carries its full tag as an associated constant, so a
//! [`Tagged<T, D>`] pairs one exact tag with one payload type. The defaults
//! [`Success`] and [`Failure`] cover the bare tags; `define_tag!` declares
//! markers for custom suffixes.

use std::marker::PhantomData;

use crate::outcome::{ERROR, Outcome, SUCCESS};
use crate::result::TaggedResult;
use crate::tag::{Tag, is_full_tag};

/// A zero-sized type standing for one tag.
///
/// `TAG` must start with the default tag of `OUTCOME`. `define_tag!` checks
/// this where the marker is declared; a hand-written marker is checked when
/// it is first used to build a [`Tagged`]:
///
/// ```compile_fail
/// use tagres_core::{Outcome, ResultTag, Tagged};
///
/// struct Mislabeled;
///
/// impl ResultTag for Mislabeled {
///     const OUTCOME: Outcome = Outcome::Success;
///     const SUFFIX: Option<&'static str> = Some("X");
///     const TAG: &'static str = "ERROR_X";
/// }
///
/// let _ = Tagged::<Mislabeled, i32>::new(1);
/// ```
pub trait ResultTag {
    const OUTCOME: Outcome;
    /// Custom suffix, `None` for the bare default tag.
    const SUFFIX: Option<&'static str>;
    /// Full tag, default tag and suffix joined by the separator.
    const TAG: &'static str;

    fn tag() -> Tag {
        const { Tag::from_static(Self::OUTCOME, Self::TAG) }
    }
}

/// Marker for the bare `SUCCESS` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Success;

impl ResultTag for Success {
    const OUTCOME: Outcome = Outcome::Success;
    const SUFFIX: Option<&'static str> = None;
    const TAG: &'static str = SUCCESS;
}

/// Marker for the bare `ERROR` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Failure;

impl ResultTag for Failure {
    const OUTCOME: Outcome = Outcome::Error;
    const SUFFIX: Option<&'static str> = None;
    const TAG: &'static str = ERROR;
}

/// A payload whose tag is fixed by the marker type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tagged<T, D> {
    data: D,
    marker: PhantomData<T>,
}

/// Result tagged `SUCCESS`.
pub type SuccessResult<D> = Tagged<Success, D>;

/// Result tagged `ERROR`.
pub type ErrorResult<D> = Tagged<Failure, D>;

impl<T: ResultTag, D> Tagged<T, D> {
    pub const fn new(data: D) -> Self {
        const {
            assert!(
                is_full_tag(T::OUTCOME, T::TAG),
                "marker tag must start with the default tag of its outcome"
            )
        };
        Self {
            data,
            marker: PhantomData,
        }
    }

    pub fn tag(&self) -> &'static str {
        T::TAG
    }

    pub fn outcome(&self) -> Outcome {
        T::OUTCOME
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }

    /// Forget the marker, keeping the tag as a runtime value.
    pub fn erase(self) -> TaggedResult<D> {
        TaggedResult::new(T::tag(), self.data)
    }
}

impl<T: ResultTag, D> From<Tagged<T, D>> for TaggedResult<D> {
    fn from(value: Tagged<T, D>) -> Self {
        value.erase()
    }
}
