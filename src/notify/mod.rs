pub mod message;
pub mod slack;
pub mod teams;

use anyhow::{Context, Result, anyhow};

use crate::config::Provider;
use crate::domain::identity::IdentityMap;
use crate::domain::pr::Recipient;

/// Render the provider-specific webhook payload for the given recipients.
pub fn build_payload(
    provider: Provider,
    channel: &str,
    recipients: &[Recipient],
    identities: &IdentityMap,
) -> Result<serde_json::Value> {
    let text = message::format_message(recipients, identities, provider);
    let payload = match provider {
        Provider::Slack => serde_json::to_value(slack::Envelope::new(channel, text)),
        Provider::Msteams => {
            serde_json::to_value(teams::Envelope::new(text, recipients, identities))
        }
    };
    payload.context("failed to serialize webhook payload")
}

/// POST the payload to the incoming webhook. Any non-2xx response is a
/// terminal failure carrying the status and response body.
pub async fn send(
    http: &reqwest::Client,
    webhook_url: &str,
    payload: &serde_json::Value,
) -> Result<()> {
    let response = http
        .post(webhook_url)
        .json(payload)
        .send()
        .await
        .map_err(|e| anyhow!("webhook POST failed: {e}"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!("webhook rejected the reminder ({status}): {body}"));
    }
    Ok(())
}
