//! Guild read client — merges a guild profile with its usable forms.

use reqwest::Client;
use tracing::debug;

use crate::errors::{ClientError, Result};
use crate::types::{Form, Guild, GuildView};

/// Fetch a guild's profile and its forms, merged into one view.
///
/// The two reads are independent and issued concurrently; results are
/// combined only after both resolve.  Forms without fields are considered
/// incomplete and excluded.  If either read fails, the whole operation
/// fails — no partial view.
pub async fn fetch_guild_view(client: &Client, api_url: &str, guild_id: u64) -> Result<GuildView> {
    let profile = async {
        let resp = client
            .get(format!("{api_url}/guilds/guild-page/{guild_id}"))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ClientError::Read(format!(
                "guild {guild_id} returned status {}",
                resp.status()
            )));
        }
        Ok::<Guild, ClientError>(resp.json().await?)
    };

    let forms = async {
        let resp = client
            .get(format!("{api_url}/guilds/{guild_id}/forms"))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ClientError::Read(format!(
                "forms for guild {guild_id} returned status {}",
                resp.status()
            )));
        }
        Ok::<Vec<Form>, ClientError>(resp.json().await?)
    };

    let (guild, forms) = tokio::try_join!(profile, forms)?;
    let form = filter_complete_forms(forms);
    debug!("Loaded guild {guild_id} with {} usable form(s)", form.len());

    Ok(GuildView { guild, form })
}

/// Keep only forms that declare at least one field.
fn filter_complete_forms(forms: Vec<Form>) -> Vec<Form> {
    forms.into_iter().filter(Form::is_complete).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_out_forms_without_fields() {
        let forms: Vec<Form> = serde_json::from_str(
            r#"[
                { "id": 1, "name": "empty", "fields": [] },
                { "id": 2, "name": "usable", "fields": [
                    { "id": "f-1", "question": "Handle?", "isRequired": true, "type": "SHORT_TEXT" }
                ] },
                { "id": 3, "name": "missing" }
            ]"#,
        )
        .unwrap();

        let kept = filter_complete_forms(forms);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 2);
    }
}
