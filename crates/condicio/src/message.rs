//! Custom failure messages and the failure factory.
//!
//! Every check resolves its failure through [`generate_failure`], which
//! applies one three-tier contract:
//!
//! | Template | Arguments | Resulting message            |
//! |----------|-----------|------------------------------|
//! | absent   | ignored   | the check's default message  |
//! | present  | absent    | the template verbatim        |
//! | present  | present   | the template, interpolated   |
//!
//! A template or argument list supplied as a runtime [`Value`] of the
//! wrong type turns the failure into `InvalidType`, whatever kind the check
//! was about to produce.

use crate::checks::{check_is_array, check_is_string};
use crate::{interpolate, Failure, FailureKind, Value};

const MESSAGE_NOT_STRING: &str = "If message is provided, it must be a string";
const ARGS_NOT_ARRAY: &str = "If arguments is provided, it must be an array";

#[derive(Clone, Copy, Debug)]
enum Template<'a> {
    Text(&'a str),
    Value(&'a Value),
}

#[derive(Clone, Copy, Debug)]
enum Args<'a> {
    Slice(&'a [Value]),
    Value(&'a Value),
}

/// The optional custom message (and its arguments) passed to a check.
///
/// ```text
/// check_argument(ok, Message::DEFAULT)?;
/// check_argument(ok, Message::new("Argument failed because of blah"))?;
/// check_argument(ok, Message::new("{0} and {1}").with_args(&[a, b]))?;
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Message<'a> {
    template: Option<Template<'a>>,
    args: Option<Args<'a>>,
}

impl Message<'static> {
    /// No custom message: failures carry the check's default message.
    pub const DEFAULT: Self = Message {
        template: None,
        args: None,
    };
}

impl<'a> Message<'a> {
    /// A custom message template.
    pub const fn new(template: &'a str) -> Self {
        Message {
            template: Some(Template::Text(template)),
            args: None,
        }
    }

    /// Attach positional arguments for `{N}` placeholders.
    #[must_use]
    pub const fn with_args(self, args: &'a [Value]) -> Self {
        Message {
            args: Some(Args::Slice(args)),
            ..self
        }
    }

    /// A template and arguments received as runtime values.
    ///
    /// `null` and `undefined` count as absent. Anything else is type-checked
    /// only when a failure is generated: a non-string template or a
    /// non-array argument list then yields `InvalidType`.
    pub fn dynamic(template: Option<&'a Value>, args: Option<&'a Value>) -> Self {
        Message {
            template: template
                .filter(|value| !value.is_nullish())
                .map(Template::Value),
            args: args.filter(|value| !value.is_nullish()).map(Args::Value),
        }
    }

    /// Whether a custom template was supplied.
    pub fn is_default(&self) -> bool {
        self.template.is_none()
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(template: &'a str) -> Self {
        Message::new(template)
    }
}

/// Build the failure a check produces when its condition is violated.
///
/// `default_message` is used when `message` carries no template. If the
/// caller's template or arguments are malformed, the returned failure is
/// the `InvalidType` describing that misuse instead of `kind`.
#[cold]
pub fn generate_failure(
    default_message: impl Into<String>,
    message: Message<'_>,
    kind: FailureKind,
) -> Failure {
    match resolve(message) {
        // Already emitted by the check that rejected the template.
        Err(misuse) => misuse,
        Ok(custom) => {
            let failure = Failure::new(kind, custom.unwrap_or_else(|| default_message.into()));
            tracing::debug!(
                kind = %failure.kind(),
                message = failure.message(),
                "precondition failed"
            );
            failure
        }
    }
}

/// The custom message text, `None` when the default applies.
fn resolve(message: Message<'_>) -> Result<Option<String>, Failure> {
    let Some(template) = message.template else {
        return Ok(None);
    };
    let Some(args) = message.args else {
        return template_text(template).map(|text| Some(text.to_owned()));
    };

    let args = match args {
        Args::Slice(items) => items,
        Args::Value(value) => {
            check_is_array(value, Message::new(ARGS_NOT_ARRAY))?;
            value.as_array().unwrap_or_default()
        }
    };
    let text = template_text(template)?;
    Ok(Some(interpolate(text, args)))
}

fn template_text(template: Template<'_>) -> Result<&str, Failure> {
    match template {
        Template::Text(text) => Ok(text),
        Template::Value(value) => {
            check_is_string(value, Message::new(MESSAGE_NOT_STRING))?;
            Ok(value.as_str().unwrap_or_default())
        }
    }
}
