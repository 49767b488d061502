//! Microsoft Graph mail transport.
//!
//! Sends through a Microsoft 365 mailbox using an app registration with
//! the client-credentials flow: fetch a token from Azure AD, then POST
//! `/users/{from}/sendMail`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{MailError, Mailer};

const TOKEN_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Settings for the Graph transport.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    /// Mailbox the messages are sent from.
    pub from_address: String,
}

pub struct GraphMailer {
    config: GraphConfig,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl GraphMailer {
    pub fn new(config: GraphConfig) -> Self {
        tracing::info!(from = %config.from_address, "Microsoft Graph mail transport configured");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn access_token(&self) -> Result<String, MailError> {
        let url = format!(
            "https://login.microsoftonline.com/{}/oauth2/v2.0/token",
            self.config.tenant_id
        );
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("scope", TOKEN_SCOPE),
            ("grant_type", "client_credentials"),
        ];
        let response = self.client.post(&url).form(&params).send().await?;
        if !response.status().is_success() {
            return Err(MailError::Auth(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }
        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl Mailer for GraphMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        let token = self.access_token().await?;
        let url = format!(
            "https://graph.microsoft.com/v1.0/users/{}/sendMail",
            self.config.from_address
        );
        let payload = json!({
            "message": {
                "subject": subject,
                "body": {
                    "contentType": "HTML",
                    "content": html_body,
                },
                "toRecipients": [
                    { "emailAddress": { "address": to } }
                ],
            },
            "saveToSentItems": true,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected(format!("{status}: {body}")));
        }

        tracing::info!(%to, "email sent via Microsoft Graph");
        Ok(())
    }
}
