//! Constants for the password policy applied to seller accounts.

/// The minimum password length a seller can register with.
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// The maximum password length a seller can register with (bounds Argon2 work).
pub const PASSWORD_MAX_LENGTH: usize = 128;
