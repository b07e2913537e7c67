use crate::utils::error::{CheckerError, Result};

pub const SENDER_ADDRESS_VAR: &str = "EMAIL_ADDRESS";
pub const APP_PASSWORD_VAR: &str = "GMAIL_APP_PASSWORD";
pub const RECIPIENTS_VAR: &str = "RECIPIENT_EMAILS";

/// Sender identity, SMTP secret and who receives the alert.
#[derive(Clone, PartialEq, Eq)]
pub struct SenderCredentials {
    pub address: String,
    pub app_password: String,
    pub recipients: Vec<String>,
}

impl std::fmt::Debug for SenderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenderCredentials")
            .field("address", &self.address)
            .field("app_password", &"<redacted>")
            .field("recipients", &self.recipients)
            .finish()
    }
}

impl SenderCredentials {
    /// Empty values count as missing. Recipients default to the sender.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| CheckerError::MissingConfigError {
                    field: name.to_string(),
                })
        };

        let address = required(SENDER_ADDRESS_VAR)?;
        let app_password = required(APP_PASSWORD_VAR)?;

        let mut recipients: Vec<String> = lookup(RECIPIENTS_VAR)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();
        if recipients.is_empty() {
            recipients.push(address.clone());
        }

        Ok(Self {
            address,
            app_password,
            recipients,
        })
    }
}
