use relay_core_contact_contracts::{ContactSendError, ContactService};
use relay_email_contracts::{Email, EmailService, MessageId};
use relay_models::{contact::ContactSubmission, email_address::EmailAddress};
use tracing::info;

mod compose;
mod sanitize;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Address the relayed submissions are delivered to.
    pub recipient: EmailAddress,
}

impl<Email> ContactServiceImpl<Email> {
    pub fn new(email: Email, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<MessageId, ContactSendError> {
        // Validation already constrains the charset, but the name ends up
        // header-adjacent (subject) and the allowed whitespace class
        // includes line breaks, so both fields are sanitized again here.
        let name = sanitize::name(&submission.name);
        let message = sanitize::message(&submission.message);
        let visitor = submission.email;

        let email = Email {
            recipient: self.config.recipient.clone(),
            subject: format!("💌 Nova mensagem de {name}"),
            text_body: compose::text_body(&name, visitor.as_str(), &message),
            html_body: compose::html_body(&name, visitor.as_str(), &message),
            reply_to: visitor,
        };

        let id = self
            .email
            .send(email)
            .await
            .map_err(ContactSendError::Delivery)?;
        info!(message_id = %id, "contact email dispatched");
        Ok(id)
    }
}
