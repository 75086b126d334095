//! Deliverability headers pinned to "normal" priority.

use lettre::message::header::{Header, HeaderName, HeaderValue};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// `X-Priority: 3`
#[derive(Debug, Clone, Copy)]
pub(crate) struct XPriority;

impl XPriority {
    pub(crate) fn normal() -> Self {
        Self
    }
}

impl Header for XPriority {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str("X-Priority")
    }

    fn parse(_s: &str) -> Result<Self, BoxError> {
        Ok(Self)
    }

    fn display(&self) -> HeaderValue {
        HeaderValue::new(Self::name(), "3".into())
    }
}

/// `X-MSMail-Priority: Normal`
#[derive(Debug, Clone, Copy)]
pub(crate) struct XMsMailPriority;

impl XMsMailPriority {
    pub(crate) fn normal() -> Self {
        Self
    }
}

impl Header for XMsMailPriority {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str("X-MSMail-Priority")
    }

    fn parse(_s: &str) -> Result<Self, BoxError> {
        Ok(Self)
    }

    fn display(&self) -> HeaderValue {
        HeaderValue::new(Self::name(), "Normal".into())
    }
}

/// `Importance: Normal`
#[derive(Debug, Clone, Copy)]
pub(crate) struct Importance;

impl Importance {
    pub(crate) fn normal() -> Self {
        Self
    }
}

impl Header for Importance {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str("Importance")
    }

    fn parse(_s: &str) -> Result<Self, BoxError> {
        Ok(Self)
    }

    fn display(&self) -> HeaderValue {
        HeaderValue::new(Self::name(), "Normal".into())
    }
}
