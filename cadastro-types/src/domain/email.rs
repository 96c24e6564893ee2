//! E-mail shape check for contact fields.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("email regex")
});

/// True for `local@domain.tld` shaped addresses.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
