//! Guild provisioning — three sequential signed writes.
//!
//! Creating a guild with a signup form takes three dependent API calls:
//! create the guild (with a default "Member" role), create the form on it,
//! then link the form to the role via a role platform.  Each step must
//! succeed before the next begins.
//!
//! There is no rollback: if step 2 or 3 fails, the guild (and possibly the
//! form) created earlier stays behind on the service in an orphaned state.
//! The external API's semantics for partial deletes are unspecified, so
//! this flow performs no compensation.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::{ClientError, Result};
use crate::signer::Signer;
use crate::types::{slugify, FormField, Requirement};

/// Default avatar for guilds provisioned by this client.
pub const GUILD_IMAGE_URL: &str = "https://cdn-icons-png.flaticon.com/512/1484/1484799.png";

const THEME_BACKGROUND_URL: &str =
    "https://cdn.midjourney.com/9105c1c1-56d4-49f2-8141-e490b4a28d55/0_2.png";

const CONTACT_EMAIL: &str = "bruno@guild.xyz";

/// User-entered input for a new guild and its signup form.
#[derive(Debug, Clone)]
pub struct FormInput {
    pub name: String,
    pub description: String,
    pub fields: Vec<FormField>,
}

/// Identifiers produced by a successful provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    pub guild_id: u64,
    pub role_id: u64,
    pub form_id: u64,
    /// Raw guild-creation response (contains `id` and `roles`).
    pub guild: Value,
}

/// Provision a guild, its signup form, and the role platform linking them.
///
/// Every payload is signed individually via `signer`.  Step errors carry
/// the raw response body so callers can surface the service's message.
pub async fn create_guild_with_form(
    client: &Client,
    api_url: &str,
    signer: &Signer,
    input: &FormInput,
) -> Result<ProvisionOutcome> {
    // Step 1: create the guild with its default Member role.
    let guild_payload = build_guild_payload(input);
    let signed = signer.sign(&guild_payload).await?;
    let resp = client
        .post(format!("{api_url}/guilds/"))
        .json(&signed)
        .send()
        .await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::GuildCreation(body));
    }
    let guild: Value = serde_json::from_str(&body)?;
    let guild_id = guild["id"]
        .as_u64()
        .ok_or_else(|| ClientError::InvalidResponse("guild response missing id".to_string()))?;
    let role_id = guild["roles"][0]["id"].as_u64().ok_or_else(|| {
        ClientError::InvalidResponse("guild response missing roles[0].id".to_string())
    })?;
    info!("Created guild {guild_id} with role {role_id}");

    // Step 2: create the form on the new guild.
    let form_payload = build_form_payload(input)?;
    let signed = signer.sign(&form_payload).await?;
    let resp = client
        .post(format!("{api_url}/guilds/{guild_id}/forms"))
        .json(&signed)
        .send()
        .await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::FormCreation(body));
    }
    let form: Value = serde_json::from_str(&body)?;
    let form_id = form["id"]
        .as_u64()
        .ok_or_else(|| ClientError::InvalidResponse("form response missing id".to_string()))?;
    info!("Created form {form_id} on guild {guild_id}");

    // Step 3: link the form to the Member role.
    let platform_payload = build_role_platform_payload(form_id);
    let signed = signer.sign(&platform_payload).await?;
    let resp = client
        .post(format!("{api_url}/guilds/{guild_id}/roles/{role_id}/role-platforms"))
        .json(&signed)
        .send()
        .await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::RolePlatformCreation(body));
    }
    info!("Linked form {form_id} to role {role_id}");

    Ok(ProvisionOutcome {
        guild_id,
        role_id,
        form_id,
        guild,
    })
}

fn build_guild_payload(input: &FormInput) -> Value {
    json!({
        "name": input.name,
        "urlName": slugify(&input.name),
        "imageUrl": GUILD_IMAGE_URL,
        "theme": { "backgroundImage": THEME_BACKGROUND_URL },
        "roles": [
            {
                "name": "Member",
                "imageUrl": "",
                "description": input.description,
                "requirements": [Requirement::free()],
            }
        ],
        "contacts": [{ "type": "EMAIL", "contact": CONTACT_EMAIL }],
    })
}

fn build_form_payload(input: &FormInput) -> Result<Value> {
    Ok(json!({
        "name": input.name,
        "description": input.description,
        "isEditable": false,
        "fields": serde_json::to_value(&input.fields)?,
    }))
}

fn build_role_platform_payload(form_id: u64) -> Value {
    json!({
        "guildPlatform": {
            "platformName": "FORM",
            "platformGuildId": format!("form-{form_id}"),
            "platformGuildData": { "formId": form_id },
        },
        "isNew": true,
        "visibility": "PUBLIC",
    })
}
