use anyhow::Context;
use log::debug;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;

use armory_stats::ItemTooltip;

#[derive(Error, Debug)]
pub enum ArmoryError {
    #[error("Character {0} not found")]
    CharacterNotFound(String),

    #[error("Character {0} has no equipped items")]
    EmptyEquipment(String),

    #[error("Armory API returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

#[derive(Clone, Debug, Deserialize)]
struct CharacterResponse {
    character: Option<CharacterInfo>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CharacterInfo {
    #[serde(default)]
    pub guid: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub level: Option<u32>,

    #[serde(default)]
    pub equipment: Vec<EquippedItem>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct EquippedItem {
    #[serde(default)]
    pub entry: u32,
}

/// Client for the Sirus armory API. No retry policy; callers decide how
/// to handle per-item failures.
pub struct ArmoryClient {
    http: reqwest::Client,
    api_url: String,
    realm_id: u32,
}

impl ArmoryClient {
    pub fn new(api_url: impl Into<String>, realm_id: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            realm_id,
        }
    }

    pub async fn fetch_character(&self, name: &str) -> Result<CharacterInfo, anyhow::Error> {
        let url = self.character_url(name);
        debug!("Fetching character from {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch character {}", name))?;
        if !response.status().is_success() {
            return Err(ArmoryError::BadStatus(response.status()).into());
        }

        let body: CharacterResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse character response for {}", name))?;

        match body.character {
            Some(character) if character.guid != 0 => Ok(character),
            _ => Err(ArmoryError::CharacterNotFound(name.to_string()).into()),
        }
    }

    pub async fn fetch_item_tooltip(
        &self,
        item_id: u32,
        character_guid: u64,
    ) -> Result<ItemTooltip, anyhow::Error> {
        let url = self.item_tooltip_url(item_id, character_guid);
        debug!("Fetching item tooltip from {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch tooltip for item {}", item_id))?;
        if !response.status().is_success() {
            return Err(ArmoryError::BadStatus(response.status()).into());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse tooltip for item {}", item_id))
    }

    fn character_url(&self, name: &str) -> String {
        format!(
            "{}/api/base/{}/character/{}?lang=ru",
            self.api_url, self.realm_id, name
        )
    }

    fn item_tooltip_url(&self, item_id: u32, character_guid: u64) -> String {
        format!(
            "{}/api/base/{}/tooltip/item/{}/{}",
            self.api_url, self.realm_id, item_id, character_guid
        )
    }
}
