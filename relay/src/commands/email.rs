use clap::Subcommand;
use relay_config::Config;
use relay_email_contracts::{Email, EmailService};
use relay_models::email_address::EmailAddress;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test {
        /// Recipient of the test message; defaults to the configured
        /// contact recipient
        recipient: Option<EmailAddress>,
    },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: Option<EmailAddress>) -> anyhow::Result<()> {
    let email_service = email::connect(&config.smtp)?;
    let recipient = recipient.unwrap_or(config.contact.recipient);

    let message_id = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            text_body: "Email deliverability seems to be working!".into(),
            html_body: "<p>Email deliverability seems to be working!</p>".into(),
            reply_to: config.smtp.user.clone(),
        })
        .await?;

    println!("{message_id}");
    Ok(())
}
