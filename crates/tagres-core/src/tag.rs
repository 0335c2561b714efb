//! Tag derivation.
//!
//! A tag is either a bare default tag (`SUCCESS`, `ERROR`) or a default tag
//! joined to a custom suffix by a single [`SEPARATOR`]. Suffixes are accepted
//! in any casing at runtime. Before joining, leading separators and any
//! repetition of the outcome's own default tag are dropped, so
//! `ERROR_NETWORK` given to the error side still yields `ERROR_NETWORK`.

use std::borrow::Cow;
use std::fmt;

use tagres_error::{Error, Result};

use crate::outcome::{Outcome, SEPARATOR};

/// A derived discriminator string together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    outcome: Outcome,
    text: Cow<'static, str>,
}

impl Tag {
    /// The bare default tag of `outcome`.
    pub const fn default_for(outcome: Outcome) -> Self {
        Self {
            outcome,
            text: Cow::Borrowed(outcome.default_tag()),
        }
    }

    /// Join `suffix` to the default tag of `outcome`.
    pub fn custom(outcome: Outcome, suffix: &str) -> Result<Self> {
        Self::derive(outcome, suffix).map_err(|e| e.with_operation("tagres::Tag::custom"))
    }

    pub(crate) fn derive(outcome: Outcome, suffix: &str) -> Result<Self> {
        let default = outcome.default_tag();
        let suffix = normalize_suffix(outcome, suffix)?;

        let mut text = String::with_capacity(default.len() + SEPARATOR.len_utf8() + suffix.len());
        text.push_str(default);
        text.push(SEPARATOR);
        text.push_str(suffix);
        tracing::trace!("derived tag '{}'", text);

        Ok(Self {
            outcome,
            text: Cow::Owned(text),
        })
    }

    /// Wrap a full tag that was assembled at compile time.
    ///
    /// `text` must be the default tag of `outcome`, alone or followed by a
    /// separator and a non-empty suffix. Evaluated in a `const`, a mismatch
    /// is a build error.
    #[doc(hidden)]
    pub const fn from_static(outcome: Outcome, text: &'static str) -> Self {
        assert!(
            is_full_tag(outcome, text),
            "static tag must start with the default tag of its outcome"
        );
        Self {
            outcome,
            text: Cow::Borrowed(text),
        }
    }

    /// Read a full discriminator back into a tag.
    ///
    /// Accepts exactly the strings the constructors can produce: a bare
    /// default tag, or a default tag, one separator and a suffix that would
    /// survive normalization unchanged.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |reason: &str| {
            Error::invalid_argument(format!("'{}' is not a result tag: {}", text, reason))
                .with_operation("tagres::Tag::parse")
                .with_context("tag", text)
        };

        let outcome = Outcome::of(text).ok_or_else(|| invalid("unknown outcome prefix"))?;
        let Some(suffix) = text[outcome.default_tag().len()..].strip_prefix(SEPARATOR) else {
            return Ok(Self::default_for(outcome));
        };

        match normalize_suffix(outcome, suffix) {
            Ok(normalized) if normalized == suffix => Ok(Self {
                outcome,
                text: Cow::Owned(text.to_string()),
            }),
            Ok(_) => Err(invalid("suffix repeats the separator or default tag")),
            Err(_) => Err(invalid("suffix is empty")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The custom part after the separator, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.text[self.outcome.default_tag().len()..].strip_prefix(SEPARATOR)
    }

    pub fn is_default(&self) -> bool {
        self.suffix().is_none()
    }
}

impl From<Outcome> for Tag {
    fn from(outcome: Outcome) -> Self {
        Self::default_for(outcome)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Tag {
    fn eq(&self, other: &String) -> bool {
        self.text.as_ref() == other.as_str()
    }
}

/// Strip leading separators and repetitions of the outcome's default tag.
fn normalize_suffix(outcome: Outcome, suffix: &str) -> Result<&str> {
    let default = outcome.default_tag();
    let mut rest = suffix.trim_start_matches(SEPARATOR);
    while let Some(after) = rest.strip_prefix(default) {
        if !(after.is_empty() || after.starts_with(SEPARATOR)) {
            break;
        }
        rest = after.trim_start_matches(SEPARATOR);
    }

    if rest.is_empty() {
        return Err(Error::empty_tag(default, suffix));
    }
    if rest.len() != suffix.len() {
        tracing::debug!("suffix '{}' normalized to '{}' for {}", suffix, rest, outcome);
    }
    Ok(rest)
}

/// Compile-time check for literal suffixes handed to the tag macros.
///
/// A literal must be non-empty, made of `A-Z`, `0-9` and `_`, must not start
/// with the separator, and must not start with its own default tag.
#[doc(hidden)]
pub const fn is_literal_suffix(outcome: Outcome, suffix: &str) -> bool {
    let bytes = suffix.as_bytes();
    if bytes.is_empty() || bytes[0] == SEPARATOR as u8 {
        return false;
    }
    if leads_with_default(bytes, outcome.default_tag().as_bytes()) {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !(b.is_ascii_uppercase() || b.is_ascii_digit() || b == SEPARATOR as u8) {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether `text` is the default tag of `outcome`, or that tag followed by a
/// separator and a non-empty suffix.
#[doc(hidden)]
pub const fn is_full_tag(outcome: Outcome, text: &str) -> bool {
    let bytes = text.as_bytes();
    let default = outcome.default_tag().as_bytes();
    leads_with_default(bytes, default) && bytes.len() != default.len() + 1
}

const fn leads_with_default(bytes: &[u8], default: &[u8]) -> bool {
    if bytes.len() < default.len() {
        return false;
    }
    let mut i = 0;
    while i < default.len() {
        if bytes[i] != default[i] {
            return false;
        }
        i += 1;
    }
    bytes.len() == default.len() || bytes[default.len()] == SEPARATOR as u8
}
