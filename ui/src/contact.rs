use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::profile::{CONTACT_EMAIL, MAIL_BODY, MAIL_SUBJECT};

/// Same set `encodeURIComponent` leaves untouched.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{email}?subject={}&body={}",
        utf8_percent_encode(subject, COMPONENT),
        utf8_percent_encode(body, COMPONENT)
    )
}

pub fn owner_mailto() -> String {
    mailto_link(CONTACT_EMAIL, MAIL_SUBJECT, MAIL_BODY)
}
