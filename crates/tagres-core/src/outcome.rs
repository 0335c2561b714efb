//! Success/error outcomes and their default tags.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Default tag of a successful result.
pub const SUCCESS: &str = "SUCCESS";

/// Default tag of a failed result.
pub const ERROR: &str = "ERROR";

/// Joins a default tag to a custom suffix. Appears exactly once in a tag.
pub const SEPARATOR: char = '_';

/// Which side of the result a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
pub enum Outcome {
    #[strum(serialize = "SUCCESS")]
    Success,
    #[strum(serialize = "ERROR")]
    Error,
}

impl Outcome {
    /// The bare tag used when no custom suffix is given.
    pub const fn default_tag(self) -> &'static str {
        match self {
            Outcome::Success => SUCCESS,
            Outcome::Error => ERROR,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub const fn is_error(self) -> bool {
        matches!(self, Outcome::Error)
    }

    /// Find the outcome whose default tag leads `tag`, either as the whole
    /// string or followed by the separator.
    pub fn of(tag: &str) -> Option<Self> {
        Self::iter().find(|outcome| {
            tag.strip_prefix(outcome.default_tag())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
        })
    }
}
