//! Submission client — posts signed form answers.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::error;

use crate::errors::{ClientError, Result};
use crate::signer::Signer;
use crate::types::SubmissionAnswer;

/// Submit one set of answers to a guild's form.
///
/// The answers are wrapped in `{ "submissionAnswers": [...] }`, signed, and
/// posted as a unit.  There is no idempotency key: retrying a submission
/// creates a duplicate on the service.
pub async fn submit(
    client: &Client,
    api_url: &str,
    guild_id: u64,
    form_id: u64,
    answers: &[SubmissionAnswer],
    signer: &Signer,
) -> Result<Value> {
    let payload = json!({ "submissionAnswers": serde_json::to_value(answers)? });
    let signed = signer.sign(&payload).await?;

    let resp = client
        .post(format!(
            "{api_url}/guilds/{guild_id}/forms/{form_id}/user-submissions"
        ))
        .json(&signed)
        .send()
        .await
        .map_err(|e| {
            error!("Submission request failed: {e}");
            ClientError::from(e)
        })?;

    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::Submission(body));
    }
    Ok(serde_json::from_str(&body)?)
}
