// Campaign and user records.
// Mirrors the JSON shape the campaigns app stores (camelCase keys).

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store;

/// An email marketing campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    /// Raw timestamp as stored. Parsed only for display.
    pub updated_at: String,
    #[serde(default)]
    pub settings: CampaignSettings,
}

impl Campaign {
    /// Create an empty campaign with a fresh id, stamped now.
    pub fn untitled() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Untitled Campaign".to_string(),
            updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            settings: CampaignSettings::default(),
        }
    }

    /// Client label for the tag badge, if one is set and non-empty.
    pub fn client_tag(&self) -> Option<&str> {
        self.settings
            .client_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Campaigns are the same entry when their ids match.
    pub fn same_as(&self, other: &Campaign) -> bool {
        self.id == other.id
    }
}

/// Per-campaign settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Settings outbox does not read, kept so rewriting a file loses nothing.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The signed-in user, as held by the session store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            email: None,
            role: Some(role.into()),
        }
    }
}

/// Load the campaign list from a JSON array file. A missing file is an empty list.
pub fn load_campaigns(path: &Path) -> Result<Vec<Campaign>> {
    let campaigns = store::read_json::<Vec<Campaign>>(path)?.unwrap_or_default();
    tracing::info!(count = campaigns.len(), path = %path.display(), "loaded campaigns");
    Ok(campaigns)
}
