//! Validated email addresses.
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$")
        .expect("Email regex invalid")
});

/// An email address which has passed format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

/// Returned when a string is not a plausible email address.
#[derive(thiserror::Error, Debug)]
#[error("'{0}' is not a valid email address")]
pub struct InvalidEmailAddress(pub String);

impl TryFrom<&str> for EmailAddress {
    type Error = InvalidEmailAddress;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidEmailAddress;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if EMAIL_REGEX.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidEmailAddress(s))
        }
    }
}

impl From<EmailAddress> for String {
    fn from(addr: EmailAddress) -> Self {
        let EmailAddress(s) = addr;
        s
    }
}
