use anyhow::Context;
use relay_config::SmtpConfig;
use relay_email_impl::EmailServiceImpl;

/// Build the SMTP transport for the configured provider
pub fn connect(config: &SmtpConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(config).context("Failed to configure SMTP transport")
}
