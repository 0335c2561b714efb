//! Runtime tagged results and their constructors.

use tagres_error::Result;

use crate::outcome::Outcome;
use crate::tag::Tag;
use crate::typed::{ResultTag, Tagged};

/// A `{ type, data }` record: a tag to branch on and the payload it labels.
///
/// Both fields are fixed at construction. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedResult<D> {
    tag: Tag,
    data: D,
}

impl<D> TaggedResult<D> {
    /// Pair an already derived tag with a payload.
    pub fn new(tag: Tag, data: D) -> Self {
        Self { tag, data }
    }

    /// The discriminator (`type`).
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }

    pub fn into_parts(self) -> (Tag, D) {
        (self.tag, self.data)
    }

    pub fn outcome(&self) -> Outcome {
        self.tag.outcome()
    }

    pub fn is_success(&self) -> bool {
        self.outcome().is_success()
    }

    pub fn is_error(&self) -> bool {
        self.outcome().is_error()
    }

    /// Check the tag against a literal.
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Move into the typed form for `T` if the tag matches `T::TAG`,
    /// otherwise hand the value back untouched.
    pub fn narrow<T: ResultTag>(self) -> std::result::Result<Tagged<T, D>, Self> {
        if self.is(T::TAG) {
            Ok(Tagged::new(self.data))
        } else {
            Err(self)
        }
    }

    /// Borrow the payload if the tag matches `T::TAG`.
    pub fn data_if<T: ResultTag>(&self) -> Option<&D> {
        self.is(T::TAG).then_some(&self.data)
    }
}

/// Successful result tagged `SUCCESS`.
pub fn ok<D>(data: D) -> TaggedResult<D> {
    TaggedResult::new(Tag::default_for(Outcome::Success), data)
}

/// Failed result tagged `ERROR`.
pub fn err<D>(data: D) -> TaggedResult<D> {
    TaggedResult::new(Tag::default_for(Outcome::Error), data)
}

/// Successful result tagged `SUCCESS_<tag>`.
///
/// Fails with `ErrorKind::EmptyTag` when nothing is left of `tag` once
/// leading separators and a repeated `SUCCESS` prefix are dropped.
pub fn ok_tagged<D>(tag: &str, data: D) -> Result<TaggedResult<D>> {
    let tag = Tag::derive(Outcome::Success, tag).map_err(|e| e.with_operation("tagres::ok_tagged"))?;
    Ok(TaggedResult::new(tag, data))
}

/// Failed result tagged `ERROR_<tag>`.
///
/// Same suffix rules as [`ok_tagged`], with `ERROR` as the default tag.
pub fn err_tagged<D>(tag: &str, data: D) -> Result<TaggedResult<D>> {
    let tag = Tag::derive(Outcome::Error, tag).map_err(|e| e.with_operation("tagres::err_tagged"))?;
    Ok(TaggedResult::new(tag, data))
}
