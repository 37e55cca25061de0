//! User profile gating access to the catalog.
//!
//! A profile is a `{username, jobTitle}` pair. It is either fully present
//! (both fields non-empty after trimming) or absent; partial profiles never
//! exist in memory.

mod store;

pub use store::{ProfileSnapshot, ProfileStore, SyncHandle};

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;

/// Storage key holding the JSON-encoded profile.
pub const STORAGE_KEY: &str = "ricky-morty-user";

/// Input limits enforced by the profile form.
pub const MAX_USERNAME_LEN: usize = 15;
pub const MAX_JOB_TITLE_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
}

impl Profile {
    /// Build a normalized profile, or `None` if either field is blank.
    pub fn new(username: &str, job_title: &str) -> Option<Self> {
        let username = username.trim();
        let job_title = job_title.trim();
        if username.is_empty() || job_title.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
            job_title: job_title.to_string(),
        })
    }

    /// Parse a persisted entry.
    ///
    /// Only a JSON object carrying both fields as strings is accepted; anything
    /// else (invalid JSON, arrays, missing or non-string fields, blank values)
    /// reads as no profile.
    pub fn from_persisted(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        let object = value.as_object()?;
        let username = object.get("username")?.as_str()?;
        let job_title = object.get("jobTitle")?.as_str()?;
        Self::new(username, job_title)
    }

    pub fn to_persisted(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Whether the form may be submitted with these raw inputs.
pub fn can_submit(username: &str, job_title: &str) -> bool {
    !username.trim().is_empty() && !job_title.trim().is_empty()
}

/// Cut `value` to at most `max` characters.
pub fn clamp_input(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
