//! Condicio - fail-fast precondition checks.
//!
//! Functions validate their inputs (and objects their state) up front and
//! get back a typed [`Failure`] describing the first violated condition:
//!
//! ```
//! use condicio::{check_element_index, FailureKind, Message, Value};
//!
//! let args = [Value::from(10), Value::from(5)];
//! let failure = check_element_index(
//!     &Value::from(10),
//!     &Value::from(5),
//!     Message::new("{0} is not a valid index for array of size {1}").with_args(&args),
//! )
//! .unwrap_err();
//!
//! assert_eq!(failure.kind(), FailureKind::IndexOutOfBounds);
//! assert_eq!(failure.message(), "10 is not a valid index for array of size 5");
//! ```
//!
//! # Modules
//!
//! - [`checks`]: `check_*` functions returning [`CheckResult`]
//! - [`predicates`]: the boolean questions the checks are built on
//! - [`Message`] / [`generate_failure`]: default, literal and interpolated
//!   failure messages
//!
//! Everything is re-exported at the crate root.
//!
//! # Tracing
//!
//! Every generated failure is emitted as a `debug` event. Route them
//! through your own subscriber, or enable the `init-tracing` feature, call
//! `init_tracing()` and set `RUST_LOG=condicio=debug`.

pub mod checks;
mod failure;
mod interpolate;
mod message;
pub mod predicates;

#[cfg(feature = "init-tracing")]
use std::sync::Once;

pub use checks::{
    check_argument, check_element_index, check_is_array, check_is_boolean, check_is_function,
    check_is_number, check_is_object, check_is_string, check_is_type, check_not_null,
    check_not_undefined, check_object_direct_property, check_object_property,
    check_position_index, check_position_indexes, check_state,
};
pub use condicio_value::{Ancestors, FunctionValue, Heap, ObjectValue, Value};
pub use failure::{CheckResult, Failure, FailureKind};
pub use interpolate::interpolate;
pub use message::{generate_failure, Message};
pub use predicates::{
    are_position_indexes_invalid, is_array, is_boolean, is_element_index_invalid, is_function,
    is_null, is_number, is_object, is_object_direct_property, is_object_property,
    is_position_index_invalid, is_string, is_type, is_undefined,
};

#[cfg(feature = "init-tracing")]
static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Safe to call multiple times, and a no-op when another subscriber is
/// already installed. Enable with `RUST_LOG=condicio=debug` (failures) or
/// `RUST_LOG=condicio=trace` (interpolation too).
#[cfg(feature = "init-tracing")]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already installed");
            }
        }
    });
}

/// Check a condition on the caller's arguments.
///
/// Accepts the condition alone, a literal template, or a template followed
/// by arguments convertible into [`Value`]. Arguments are only evaluated
/// when the condition is false.
///
/// ```
/// use condicio::FailureKind;
///
/// fn set_width(width: i32) -> condicio::CheckResult {
///     condicio::check_argument!(width > 0, "Width must be positive; got {0}", width)
/// }
///
/// assert!(set_width(3).is_ok());
/// let failure = set_width(-1).unwrap_err();
/// assert_eq!(failure.kind(), FailureKind::IllegalArgument);
/// assert_eq!(failure.message(), "Width must be positive; got -1");
/// ```
#[macro_export]
macro_rules! check_argument {
    ($($input:tt)+) => {
        $crate::__check_expression!($crate::check_argument; $($input)+)
    };
}

/// Check a condition on the state of the receiver. Same forms as
/// [`check_argument!`].
#[macro_export]
macro_rules! check_state {
    ($($input:tt)+) => {
        $crate::__check_expression!($crate::check_state; $($input)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_expression {
    ($check:path; $expression:expr $(,)?) => {
        $check($expression, $crate::Message::DEFAULT)
    };
    ($check:path; $expression:expr, $template:expr $(,)?) => {
        $check($expression, $crate::Message::new($template))
    };
    ($check:path; $expression:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        if $expression {
            $crate::CheckResult::Ok(())
        } else {
            let args = [$($crate::Value::from($arg)),+];
            $check(false, $crate::Message::new($template).with_args(&args))
        }
    };
}
