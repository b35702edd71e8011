//! Local guild directory — a best-effort secondary index.
//!
//! The directory service keeps a reduced projection of guilds created
//! through this client, purely for listing.  It is not a source of truth:
//! entries are written once after a successful provisioning run and never
//! reconciled against the guild API, and duplicate entries are possible.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::{ClientError, Result};
use crate::types::{slugify, DirectoryEntry};

/// Directory thumbnail pinned for every guild created through this client.
pub const DIRECTORY_IMAGE_URL: &str =
    "https://guild-xyz.mypinata.cloud/ipfs/QmVvZzREJtugFxzgnNWKAJyLkwuRXDjw3TLJGpG3Dx5PQa";

/// List all directory entries.
///
/// The response must be a JSON array; anything else is an invalid-response
/// error.  Duplicates are passed through untouched.
pub async fn list(client: &Client, directory_url: &str) -> Result<Vec<DirectoryEntry>> {
    let resp = client.get(format!("{directory_url}/guilds")).send().await?;
    if !resp.status().is_success() {
        return Err(ClientError::Directory(format!(
            "list returned status {}",
            resp.status()
        )));
    }

    let body: Value = resp.json().await?;
    if !body.is_array() {
        return Err(ClientError::InvalidResponse(
            "directory list is not an array".to_string(),
        ));
    }

    let entries: Vec<DirectoryEntry> = serde_json::from_value(body)?;
    debug!("Directory holds {} entries", entries.len());
    Ok(entries)
}

/// Append one entry to the directory.
///
/// Fire-and-forget with respect to the guild API: no uniqueness check, no
/// transactional link to provisioning.
pub async fn append(client: &Client, directory_url: &str, entry: &DirectoryEntry) -> Result<()> {
    let resp = client
        .post(format!("{directory_url}/guilds"))
        .json(entry)
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(ClientError::Directory(format!(
            "append returned status {}",
            resp.status()
        )));
    }
    Ok(())
}

/// The reduced projection recorded for a freshly provisioned guild.
pub fn entry_for_new_guild(guild_id: u64, name: &str) -> DirectoryEntry {
    DirectoryEntry {
        id: guild_id,
        name: name.to_string(),
        url_name: slugify(name),
        image_url: DIRECTORY_IMAGE_URL.to_string(),
    }
}
