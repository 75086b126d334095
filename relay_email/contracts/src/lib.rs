use std::future::Future;

use relay_models::email_address::EmailAddress;
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Deliver the email and return the transport's message identifier.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<MessageId>> + Send;

    /// Test the connection to the SMTP server.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// A composed email ready for dispatch. The transport supplies the sender
/// mailbox and deliverability headers; everything here derives from one
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddress,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    /// Where a direct reply should go (the visitor's address).
    pub reply_to: EmailAddress,
}

/// Message identifier assigned at dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: MessageId) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_failing(mut self, email: Email, error: &'static str) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
