use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

/// An email address plus an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    /// Upper bound on the length of an address (RFC 5321 forward path).
    pub const MAX_CHARS: usize = 254;

    /// Parse an address after applying the standard normalization the
    /// contact form performs: trim surrounding whitespace and lowercase.
    pub fn parse_normalized(input: &str) -> Result<Self, lettre::address::AddressError> {
        input.trim().to_lowercase().parse().map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn with_name(self, name: String) -> EmailAddressWithName {
        EmailAddressWithName(lettre::message::Mailbox {
            name: Some(name),
            email: self.0,
        })
    }
}

impl EmailAddressWithName {
    pub fn into_email_address(self) -> EmailAddress {
        EmailAddress(self.0.email)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_lowercases() {
        let email = EmailAddress::parse_normalized("  Joao@Exemplo.COM ").unwrap();
        assert_eq!(email.as_str(), "joao@exemplo.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for input in ["not-an-email", "missing-domain@", "@missing-local", ""] {
            assert!(EmailAddress::parse_normalized(input).is_err(), "{input:?}");
        }
    }

    #[test]
    fn with_name_round_trip() {
        let email: EmailAddress = "joao@exemplo.com".parse().unwrap();
        let mailbox = email.clone().with_name("João".into());
        assert_eq!(mailbox.into_email_address(), email);
    }
}
