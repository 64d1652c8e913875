//! Diagnostic sink for invalid size requests.
//!
//! Reading a scalable quantity as if it were fixed produces a value that is
//! wrong for every runtime factor but one. Such requests end here and never
//! return into the caller. The host decides how they end through
//! [`InvalidSizePolicy`].

use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Panic payload of an invalid size request under
/// [`InvalidSizePolicy::Panic`].
///
/// Hosts that want a recoverable error can `catch_unwind` and downcast to
/// this type.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid size request on a scalable quantity: {message}")]
pub struct InvalidSizeRequest {
    pub message: String,
}

/// What [`report_invalid_size_request`] does.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum InvalidSizePolicy {
    /// Unwind with an [`InvalidSizeRequest`] payload.
    #[default]
    Panic = 0,
    /// Print the request and abort the process.
    Abort = 1,
}

/// Unrecognised [`InvalidSizePolicy`] name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown invalid-size policy `{0}` (expected `panic` or `abort`)")]
pub struct PolicyParseError(pub String);

static POLICY: AtomicU8 = AtomicU8::new(InvalidSizePolicy::Panic as u8);

impl InvalidSizePolicy {
    /// Environment variable read by [`InvalidSizePolicy::from_env`].
    pub const ENV_VAR: &'static str = "VT_INVALID_SIZE";

    pub const fn name(self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::Abort => "abort",
        }
    }

    /// The policy named by `VT_INVALID_SIZE`, if set.
    pub fn from_env() -> Result<Option<Self>, PolicyParseError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => value.parse().map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Install the policy named by `VT_INVALID_SIZE`. Leaves the current
    /// policy alone when the variable is unset.
    pub fn install_from_env() -> Result<(), PolicyParseError> {
        if let Some(policy) = Self::from_env()? {
            set_invalid_size_policy(policy);
        }
        Ok(())
    }
}

impl FromStr for InvalidSizePolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "panic" => Ok(Self::Panic),
            "abort" => Ok(Self::Abort),
            _ => Err(PolicyParseError(s.to_owned())),
        }
    }
}

/// Set the process-wide policy.
pub fn set_invalid_size_policy(policy: InvalidSizePolicy) {
    POLICY.store(policy as u8, Ordering::Relaxed);
}

/// The process-wide policy.
pub fn invalid_size_policy() -> InvalidSizePolicy {
    match POLICY.load(Ordering::Relaxed) {
        1 => InvalidSizePolicy::Abort,
        _ => InvalidSizePolicy::Panic,
    }
}

/// Report that code asked for a fixed size of a scalable quantity.
#[cold]
pub fn report_invalid_size_request(message: &str) -> ! {
    tracing::error!(request = message, "invalid size request on a scalable quantity");
    match invalid_size_policy() {
        InvalidSizePolicy::Panic => std::panic::panic_any(InvalidSizeRequest {
            message: message.to_owned(),
        }),
        InvalidSizePolicy::Abort => {
            eprintln!("error: invalid size request on a scalable quantity: {message}");
            std::process::abort()
        }
    }
}
