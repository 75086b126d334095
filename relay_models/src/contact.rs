use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

use crate::email_address::EmailAddress;

/// A contact-form submission that has passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: SubmissionName,
    pub email: EmailAddress,
    pub message: SubmissionMessage,
}

/// Letters (incl. Latin-1 supplement, Latin extended A/B and Cyrillic),
/// whitespace, hyphen and apostrophe.
pub static SUBMISSION_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÿ\u{0100}-\u{017F}\u{0180}-\u{024F}\u{0400}-\u{04FF}\s'-]+$").unwrap()
});

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_min = 2, len_char_max = 100, regex = SUBMISSION_NAME_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionName(String);

impl SubmissionName {
    pub const MIN_CHARS: usize = 2;
    pub const MAX_CHARS: usize = 100;
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_min = 10, len_char_max = 2000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

impl SubmissionMessage {
    pub const MIN_CHARS: usize = 10;
    pub const MAX_CHARS: usize = 2000;
}
