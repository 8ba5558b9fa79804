//! Error handling and exit codes.

use smoothplot_core::{exit_codes, SmoothError};

/// Exit code for an application error.
///
/// Table errors map to their own codes; anything else is generic.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<SmoothError>()
        .map_or(exit_codes::ERROR_GENERIC, SmoothError::exit_code)
}
