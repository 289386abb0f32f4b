// Client module - Guild Wars 2 account API
pub mod api;

pub use api::Gw2Client;

use crate::errors::Result;
use crate::models::*;
use async_trait::async_trait;

/// Read-only account surface the tracker consumes.
///
/// `Gw2Client` talks to the live API; tests substitute in-memory accounts.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Details of the key in use. An unknown key is a `Credential` error.
    async fn token_info(&self) -> Result<TokenInfo>;
    async fn item(&self, id: u32) -> Result<Item>;
    async fn currency(&self, id: u32) -> Result<Currency>;
    async fn account_inventory(&self) -> Result<Vec<Option<InventorySlot>>>;
    async fn account_bank(&self) -> Result<Vec<Option<InventorySlot>>>;
    async fn account_materials(&self) -> Result<Vec<Option<MaterialSlot>>>;
    async fn account_wallet(&self) -> Result<Vec<WalletEntry>>;
    /// Names of every character on the account.
    async fn characters(&self) -> Result<Vec<String>>;
    async fn character_inventory(&self, name: &str) -> Result<CharacterInventory>;
}
