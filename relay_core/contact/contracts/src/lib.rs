use std::future::Future;

use relay_email_contracts::MessageId;
use relay_models::contact::ContactSubmission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Relay a validated submission to the configured recipient, returning
    /// the transport's delivery identifier.
    fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<MessageId, ContactSendError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendError {
    /// The SMTP transport could not deliver the message. Not retried; the
    /// HTTP layer maps this to a 500.
    #[error("Falha ao enviar email: {0:#}")]
    Delivery(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_send_message(mut self, submission: ContactSubmission, result: MessageId) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_message_failing(
        mut self,
        submission: ContactSubmission,
        error: &'static str,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| {
                Box::pin(std::future::ready(Err(ContactSendError::Delivery(
                    anyhow::anyhow!(error),
                ))))
            });
        self
    }
}
