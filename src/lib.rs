//! Guild.xyz provisioning & submission client.
//!
//! Async client for the guild.xyz v2 API plus a small local guild
//! directory.  The interesting flow is [`provision::create_guild_with_form`]:
//! three strictly sequential signed writes (guild → form → role platform)
//! with no rollback on partial failure.  Every write is authenticated by a
//! [`signer::Signer`], which wraps an arbitrary wallet-supplied message
//! signing capability.
//!
//! The crate holds no authoritative state: all durable data lives behind
//! the external API, and the directory is a best-effort index only.

pub mod config;
pub mod directory;
pub mod errors;
pub mod guilds;
pub mod provision;
pub mod requirements;
pub mod signer;
pub mod submissions;
pub mod types;

pub use config::Config;
pub use errors::{ClientError, Result};
pub use provision::{create_guild_with_form, FormInput, ProvisionOutcome};
pub use signer::Signer;
pub use types::{
    DirectoryEntry, FieldType, Form, FormField, Guild, GuildView, Requirement, Role,
    SubmissionAnswer,
};
