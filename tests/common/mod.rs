// In-memory account shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use gw2_tracker::errors::{Result, TrackerError};
use gw2_tracker::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct MockAccount {
    pub permissions: Vec<String>,
    pub rejected_key: bool,
    pub item_names: HashMap<u32, String>,
    pub currency_names: HashMap<u32, String>,
    pub shared: Vec<Option<InventorySlot>>,
    pub bank: Vec<Option<InventorySlot>>,
    pub materials: Vec<Option<MaterialSlot>>,
    pub wallet: Vec<WalletEntry>,
    pub characters: Vec<(String, CharacterInventory)>,
    /// Endpoint that answers with a server error, e.g. "account/bank".
    pub failing: Option<&'static str>,
    pub wallet_calls: AtomicUsize,
}

impl MockAccount {
    pub fn new() -> Self {
        Self {
            permissions: ["account", "characters", "inventories", "wallet", "progression"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_item(mut self, id: u32, name: &str) -> Self {
        self.item_names.insert(id, name.to_string());
        self
    }

    pub fn with_currency(mut self, id: u32, name: &str) -> Self {
        self.currency_names.insert(id, name.to_string());
        self
    }

    pub fn with_character(mut self, name: &str, bags: Vec<Option<Bag>>) -> Self {
        self.characters.push((name.to_string(), CharacterInventory { bags }));
        self
    }

    fn check(&self, endpoint: &str) -> Result<()> {
        if self.failing == Some(endpoint) {
            return Err(TrackerError::Api {
                endpoint: format!("/v2/{}", endpoint),
                status: 503,
                message: "API not active".to_string(),
            });
        }
        Ok(())
    }
}

pub fn slot(id: u32, count: i64) -> Option<InventorySlot> {
    Some(InventorySlot { id, count, binding: None })
}

pub fn material(id: u32, count: i64) -> Option<MaterialSlot> {
    Some(MaterialSlot { id, category: 5, count })
}

pub fn bag(slots: Vec<Option<InventorySlot>>) -> Option<Bag> {
    Some(Bag { id: 8932, size: slots.len() as u32, inventory: slots })
}

#[async_trait]
impl AccountApi for MockAccount {
    async fn token_info(&self) -> Result<TokenInfo> {
        self.check("tokeninfo")?;
        if self.rejected_key {
            return Err(TrackerError::Credential("Invalid access token".to_string()));
        }
        Ok(TokenInfo {
            id: "ABCD-1234".to_string(),
            name: "tracker".to_string(),
            permissions: self.permissions.clone(),
        })
    }

    async fn item(&self, id: u32) -> Result<Item> {
        self.check("items")?;
        match self.item_names.get(&id) {
            Some(name) => Ok(Item { id, name: name.clone(), item_type: None, rarity: None }),
            None => Err(TrackerError::Api {
                endpoint: format!("/v2/items/{}", id),
                status: 404,
                message: "no such id".to_string(),
            }),
        }
    }

    async fn currency(&self, id: u32) -> Result<Currency> {
        self.check("currencies")?;
        match self.currency_names.get(&id) {
            Some(name) => Ok(Currency { id, name: name.clone(), description: None }),
            None => Err(TrackerError::Api {
                endpoint: format!("/v2/currencies/{}", id),
                status: 404,
                message: "no such id".to_string(),
            }),
        }
    }

    async fn account_inventory(&self) -> Result<Vec<Option<InventorySlot>>> {
        self.check("account/inventory")?;
        Ok(self.shared.clone())
    }

    async fn account_bank(&self) -> Result<Vec<Option<InventorySlot>>> {
        self.check("account/bank")?;
        Ok(self.bank.clone())
    }

    async fn account_materials(&self) -> Result<Vec<Option<MaterialSlot>>> {
        self.check("account/materials")?;
        Ok(self.materials.clone())
    }

    async fn account_wallet(&self) -> Result<Vec<WalletEntry>> {
        self.wallet_calls.fetch_add(1, Ordering::SeqCst);
        self.check("account/wallet")?;
        Ok(self.wallet.clone())
    }

    async fn characters(&self) -> Result<Vec<String>> {
        self.check("characters")?;
        Ok(self.characters.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn character_inventory(&self, name: &str) -> Result<CharacterInventory> {
        self.check("characters/inventory")?;
        self.characters
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, inventory)| inventory.clone())
            .ok_or_else(|| TrackerError::Api {
                endpoint: format!("/v2/characters/{}/inventory", name),
                status: 404,
                message: "no such character".to_string(),
            })
    }
}
