//! Human-readable formatting for role requirements.
//!
//! Requirement kinds arrive as free-form string tags from the API.  The
//! recognised ones get a friendly description; anything else falls back to
//! displaying the raw tag, never an error.

use crate::types::Requirement;

/// Requirement kinds this client knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    TwitterFollowerCount,
    TwitterAccountAgeRelative,
    DiscordJoinFromNow,
    DiscordRole,
    Free,
    Unknown,
}

impl RequirementKind {
    /// Parse an API requirement tag into a [`RequirementKind`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "TWITTER_FOLLOWER_COUNT" => Self::TwitterFollowerCount,
            "TWITTER_ACCOUNT_AGE_RELATIVE" => Self::TwitterAccountAgeRelative,
            "DISCORD_JOIN_FROM_NOW" => Self::DiscordJoinFromNow,
            "DISCORD_ROLE" => Self::DiscordRole,
            "FREE" => Self::Free,
            _ => Self::Unknown,
        }
    }
}

/// Describe a requirement for display.
///
/// Known kinds with incomplete `data` degrade to the raw tag, matching the
/// fallback for unknown kinds.
pub fn describe(req: &Requirement) -> String {
    let fallback = || req.kind.clone();

    match RequirementKind::from_tag(&req.kind) {
        RequirementKind::TwitterFollowerCount => req
            .data
            .min_amount
            .map(|n| format!("Have at least {} Twitter followers", n as u64))
            .unwrap_or_else(fallback),
        RequirementKind::TwitterAccountAgeRelative => req
            .data
            .min_amount
            .map(|ms| format!("Twitter account age: {} days", millis_to_days(ms)))
            .unwrap_or_else(fallback),
        RequirementKind::DiscordJoinFromNow => req
            .data
            .member_since
            .map(|ms| format!("Joined Discord server {} days ago", millis_to_days(ms)))
            .unwrap_or_else(fallback),
        RequirementKind::DiscordRole => match (&req.data.role_name, &req.data.server_name) {
            (Some(role), Some(server)) => {
                format!("Have \"{role}\" role in \"{server}\" Discord server")
            }
            _ => fallback(),
        },
        // FREE has no friendly phrasing upstream; show the tag.
        RequirementKind::Free | RequirementKind::Unknown => fallback(),
    }
}

fn millis_to_days(ms: f64) -> u64 {
    (ms / 86_400_000.0).floor() as u64
}
