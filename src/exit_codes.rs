//! Exit code constants for the invoicegen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Generation failure (input rejected by the field resolver or template)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or malformed input files, invalid config.
pub const USER_ERROR: i32 = 1;

/// Generation failure: the profile rejected the field set or the template could not be completed.
pub const GENERATION_FAILURE: i32 = 2;
