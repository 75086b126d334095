use anyhow::{anyhow, Context};
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use relay_config::{SmtpConfig, TlsMode};
use relay_email_contracts::{Email, EmailService, MessageId};
use uuid::Uuid;

use crate::headers::{Importance, XMsMailPriority, XPriority};

mod headers;

/// Display name attached to the envelope sender. The sender address itself
/// is always the authenticated account, never the visitor's, so the mail
/// passes sender-domain authentication.
const FROM_NAME: &str = "Site - Novo Contato";

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    /// Build the SMTP transport from the resolved provider settings.
    /// Certificate validation stays at lettre's enforced default; the
    /// connection itself is only opened on first use.
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let settings = config.server.resolve();
        let builder = match settings.tls {
            TlsMode::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host),
            TlsMode::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            }
        }
        .with_context(|| format!("Failed to configure SMTP transport for {}", settings.host))?;

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                config.user.as_str().to_owned(),
                config.pass.clone(),
            ))
            .build();

        let from = config.user.clone().with_name(FROM_NAME.into()).0;

        Ok(Self { from, transport })
    }

    fn build_message(&self, email: Email, message_id: &str) -> anyhow::Result<Message> {
        Message::builder()
            .from(self.from.clone())
            .to(Mailbox::new(None, email.recipient.0))
            .reply_to(Mailbox::new(None, email.reply_to.0))
            .subject(email.subject)
            .message_id(Some(message_id.to_owned()))
            // Normal priority on all three variants; mail marked urgent
            // trips spam heuristics.
            .header(XPriority::normal())
            .header(XMsMailPriority::normal())
            .header(Importance::normal())
            .multipart(MultiPart::alternative_plain_html(
                email.text_body,
                email.html_body,
            ))
            .map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<MessageId> {
        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.from.email.domain());
        let message = self.build_message(email, &message_id)?;

        let response = self.transport.send(message).await?;
        anyhow::ensure!(
            response.is_positive(),
            "SMTP server rejected the message: {}",
            response.code()
        );

        Ok(MessageId(message_id))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
