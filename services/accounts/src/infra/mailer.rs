use std::time::Duration;

use serde_json::json;

use crate::domain::repository::Mailer;
use crate::error::AccountsServiceError;

/// TCP connect timeout for the mail API.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout for the mail API.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Transactional mail API client. Posts a JSON payload authenticated with
/// an `api-key` header; any failure is reported as retryable.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_name: String,
    from_email: String,
}

impl HttpMailer {
    pub fn new(
        api_url: String,
        api_key: String,
        from_name: String,
        from_email: String,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
            from_name,
            from_email,
        })
    }
}

impl Mailer for HttpMailer {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), AccountsServiceError> {
        let payload = json!({
            "sender": { "name": self.from_name, "email": self.from_email },
            "to": [{ "email": to }],
            "subject": subject,
            "textContent": body,
        });
        self.client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AccountsServiceError::Transient(anyhow::Error::new(e).context("send mail")))?
            .error_for_status()
            .map_err(|e| {
                AccountsServiceError::Transient(anyhow::Error::new(e).context("mail API status"))
            })?;
        Ok(())
    }
}
