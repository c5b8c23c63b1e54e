//! Failure taxonomy.
//!
//! Every violated precondition produces exactly one [`Failure`]: a kind
//! from the closed [`FailureKind`] set plus a fully resolved message.
//! Callers match on the kind to decide whether to recover.

use std::fmt;

/// Category of a violated precondition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    /// An argument fails a caller-stated predicate.
    IllegalArgument,
    /// Object or program state fails a caller-stated predicate.
    IllegalState,
    /// A value that must not be `null` is.
    NullReference,
    /// A value that must be present is `undefined`.
    UndefinedReference,
    /// An index, position or range lies outside its bounds.
    IndexOutOfBounds,
    /// A required property is missing.
    PropertyNotFound,
    /// A value's runtime type does not match the required type.
    InvalidType,
}

impl FailureKind {
    /// Every kind, in declaration order.
    pub const ALL: [FailureKind; 7] = [
        FailureKind::IllegalArgument,
        FailureKind::IllegalState,
        FailureKind::NullReference,
        FailureKind::UndefinedReference,
        FailureKind::IndexOutOfBounds,
        FailureKind::PropertyNotFound,
        FailureKind::InvalidType,
    ];

    /// Conventional exception name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            FailureKind::IllegalArgument => "IllegalArgumentException",
            FailureKind::IllegalState => "IllegalStateException",
            FailureKind::NullReference => "NullReferenceException",
            FailureKind::UndefinedReference => "UndefinedReferenceException",
            FailureKind::IndexOutOfBounds => "IndexOutOfBoundsException",
            FailureKind::PropertyNotFound => "PropertyNotFoundException",
            FailureKind::InvalidType => "InvalidTypeException",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A violated precondition.
///
/// `Display` prints the message alone; use [`Failure::name`] or
/// [`Failure::kind`] for the category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct Failure {
    kind: FailureKind,
    message: String,
}

impl Failure {
    /// Create a failure of any kind.
    #[cold]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Conventional exception name of this failure's kind.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether this failure belongs to `kind`.
    #[inline]
    pub fn is(&self, kind: FailureKind) -> bool {
        self.kind == kind
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Outcome of a check: `Ok(())` when the precondition holds.
pub type CheckResult = Result<(), Failure>;
