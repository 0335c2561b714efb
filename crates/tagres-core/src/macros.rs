//! Declarative macros for literal tags.
//!
//! Literal suffixes are checked while compiling: they must be non-empty
//! `UPPER_SNAKE_CASE` and must not repeat their own default tag. Runtime
//! suffixes go through `ok_tagged`/`err_tagged` instead, which accept any
//! casing.

/// Build a successful [`TaggedResult`](crate::TaggedResult).
///
/// `ok!(data)` is tagged `SUCCESS`; `ok!("TAG", data)` is tagged
/// `SUCCESS_TAG`, with the tag text assembled at compile time.
///
/// The literal must be non-empty `UPPER_SNAKE_CASE`:
///
/// ```compile_fail
/// let _ = tagres_core::ok!("", 1);
/// ```
///
/// ```compile_fail
/// let _ = tagres_core::ok!("user", 1);
/// ```
///
/// ```compile_fail
/// let _ = tagres_core::ok!("_FOO", 1);
/// ```
#[macro_export]
macro_rules! ok {
    ($tag:tt, $($data:tt)+) => {
        $crate::__tagged_literal!(Success, "SUCCESS_", $tag, $($data)+)
    };
    ($data:expr $(,)?) => {
        $crate::ok($data)
    };
}

/// Build a failed [`TaggedResult`](crate::TaggedResult).
///
/// `err!(data)` is tagged `ERROR`; `err!("TAG", data)` is tagged `ERROR_TAG`.
///
/// Repeating the default tag in the literal does not compile:
///
/// ```compile_fail
/// let _ = tagres_core::err!("ERROR_X", 1);
/// ```
///
/// ```compile_fail
/// let _ = tagres_core::err!(42, 1);
/// ```
#[macro_export]
macro_rules! err {
    ($tag:tt, $($data:tt)+) => {
        $crate::__tagged_literal!(Error, "ERROR_", $tag, $($data)+)
    };
    ($data:expr $(,)?) => {
        $crate::err($data)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tagged_literal {
    ($outcome:ident, $prefix:literal, $tag:literal, $data:expr $(,)?) => {{
        const _: () = ::core::assert!(
            $crate::tag::is_literal_suffix($crate::Outcome::$outcome, $tag),
            "tag literal must be a non-empty UPPER_SNAKE_CASE suffix that does not repeat its default tag"
        );
        const __TAG: $crate::Tag =
            $crate::Tag::from_static($crate::Outcome::$outcome, ::core::concat!($prefix, $tag));
        $crate::TaggedResult::new(__TAG, $data)
    }};
}

/// Declare marker types implementing [`ResultTag`](crate::ResultTag).
///
/// ```
/// tagres_core::define_tag! {
///     /// A user row was inserted.
///     pub UserCreated = ok "USER_CREATED";
///     pub ValidationFailed = err "VALIDATION_FAILED";
///     pub Crashed = err;
/// }
///
/// use tagres_core::ResultTag;
/// assert_eq!(UserCreated::TAG, "SUCCESS_USER_CREATED");
/// assert_eq!(ValidationFailed::TAG, "ERROR_VALIDATION_FAILED");
/// assert_eq!(Crashed::TAG, "ERROR");
/// ```
///
/// Suffixes follow the same literal rules as `ok!` and `err!`:
///
/// ```compile_fail
/// tagres_core::define_tag! {
///     pub Foo = ok "_FOO";
/// }
/// ```
///
/// ```compile_fail
/// tagres_core::define_tag! {
///     pub Created = ok "created";
/// }
/// ```
#[macro_export]
macro_rules! define_tag {
    (@one [$($attr:tt)*] $vis:vis $name:ident, ok) => {
        $crate::define_tag!(@marker [$($attr)*] $vis $name, Success, ::core::option::Option::None, "SUCCESS");
    };
    (@one [$($attr:tt)*] $vis:vis $name:ident, err) => {
        $crate::define_tag!(@marker [$($attr)*] $vis $name, Error, ::core::option::Option::None, "ERROR");
    };
    (@one [$($attr:tt)*] $vis:vis $name:ident, ok, $suffix:literal) => {
        $crate::define_tag!(@check Success, $suffix);
        $crate::define_tag!(
            @marker [$($attr)*] $vis $name, Success,
            ::core::option::Option::Some($suffix),
            ::core::concat!("SUCCESS_", $suffix)
        );
    };
    (@one [$($attr:tt)*] $vis:vis $name:ident, err, $suffix:literal) => {
        $crate::define_tag!(@check Error, $suffix);
        $crate::define_tag!(
            @marker [$($attr)*] $vis $name, Error,
            ::core::option::Option::Some($suffix),
            ::core::concat!("ERROR_", $suffix)
        );
    };

    (@check $outcome:ident, $suffix:literal) => {
        const _: () = ::core::assert!(
            $crate::tag::is_literal_suffix($crate::Outcome::$outcome, $suffix),
            "tag literal must be a non-empty UPPER_SNAKE_CASE suffix that does not repeat its default tag"
        );
    };

    (@marker [$($attr:tt)*] $vis:vis $name:ident, $outcome:ident, $suffix:expr, $tag:expr) => {
        $($attr)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::ResultTag for $name {
            const OUTCOME: $crate::Outcome = $crate::Outcome::$outcome;
            const SUFFIX: ::core::option::Option<&'static str> = $suffix;
            const TAG: &'static str = $tag;
        }

        const _: () = ::core::assert!(
            $crate::tag::is_full_tag(
                <$name as $crate::ResultTag>::OUTCOME,
                <$name as $crate::ResultTag>::TAG,
            ),
            "marker tag must start with the default tag of its outcome"
        );
    };

    (
        $(
            $(#[$meta:meta])*
            $vis:vis $name:ident = $kind:ident $($suffix:literal)?;
        )*
    ) => {
        $(
            $crate::define_tag!(@one [$(#[$meta])*] $vis $name, $kind $(, $suffix)?);
        )*
    };
}

/// Declare an enum whose variants each pair one tag marker with one payload
/// type. Matching a variant yields its payload at its own type.
///
/// Each variant gets an `is_<variant>()` predicate; the outcome side is read
/// through `outcome()`.
///
/// ```
/// use tagres_core::{Failure, Tagged, define_tag, tagged_union};
///
/// define_tag! {
///     pub Parsed = ok "PARSED";
/// }
///
/// tagged_union! {
///     pub enum ParseOutcome {
///         Number(Parsed => i64),
///         Rejected(Failure => String),
///     }
/// }
///
/// let outcome = ParseOutcome::from(Tagged::<Parsed, i64>::new(42));
/// assert_eq!(outcome.tag(), "SUCCESS_PARSED");
/// assert!(outcome.is_number());
/// match outcome {
///     ParseOutcome::Number(n) => assert_eq!(n + 1, 43),
///     ParseOutcome::Rejected(reason) => panic!("{reason}"),
/// }
/// ```
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($marker:ty => $payload:ty)
            ),* $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$vmeta])*
                    $variant($payload),
                )*
            }

            #[allow(dead_code)]
            impl $name {
                /// Every tag this union can carry, in declaration order.
                pub const TAGS: &'static [&'static str] = &[
                    $(<$marker as $crate::ResultTag>::TAG,)*
                ];

                pub fn tag(&self) -> &'static str {
                    match self {
                        $(
                            Self::$variant(_) => <$marker as $crate::ResultTag>::TAG,
                        )*
                    }
                }

                pub fn outcome(&self) -> $crate::Outcome {
                    match self {
                        $(
                            Self::$variant(_) => <$marker as $crate::ResultTag>::OUTCOME,
                        )*
                    }
                }

                $(
                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        ::core::matches!(self, Self::$variant(_))
                    }
                )*
            }

            $(
                impl ::core::convert::From<$crate::Tagged<$marker, $payload>> for $name {
                    fn from(value: $crate::Tagged<$marker, $payload>) -> Self {
                        Self::$variant(value.into_data())
                    }
                }
            )*
        }
    };
}
