use crate::config::{SenderCredentials, SmtpSettings};
use crate::core::Notifier;
use crate::utils::error::Result;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Plain-text alerts over SMTPS, logged in as the sender.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipients: Vec<Mailbox>,
}

impl SmtpNotifier {
    /// Addresses are checked here; nothing connects until `send`.
    pub fn new(settings: &SmtpSettings, credentials: &SenderCredentials) -> Result<Self> {
        let sender: Mailbox = credentials.address.parse()?;
        let recipients = credentials
            .recipients
            .iter()
            .map(|recipient| recipient.parse::<Mailbox>())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(
                credentials.address.clone(),
                credentials.app_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender,
            recipients,
        })
    }

    pub fn build_message(&self, subject: &str, body: &str) -> Result<Message> {
        let mut builder = Message::builder()
            .from(self.sender.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);
        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }
        Ok(builder.body(body.to_string())?)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<()> {
        let message = self.build_message(subject, body)?;
        tracing::debug!("Sending email to {} recipient(s)", self.recipients.len());
        self.transport.send(message).await?;
        Ok(())
    }
}
