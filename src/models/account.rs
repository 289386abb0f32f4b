use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TokenInfo {
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
}

/// One occupied slot of the shared inventory, the bank or a character bag.
/// Empty slots arrive as `null` and are modelled as `None` by the containers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InventorySlot {
    pub id: u32,
    pub count: i64,
    #[serde(default)]
    pub binding: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Bag {
    pub id: u32,
    pub size: u32,
    pub inventory: Vec<Option<InventorySlot>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CharacterInventory {
    pub bags: Vec<Option<Bag>>,
}

impl CharacterInventory {
    /// Every occupied slot across all equipped bags.
    pub fn slots(&self) -> impl Iterator<Item = &InventorySlot> {
        self.bags
            .iter()
            .flatten()
            .flat_map(|bag| bag.inventory.iter().flatten())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MaterialSlot {
    pub id: u32,
    pub category: u32,
    pub count: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WalletEntry {
    pub id: u32,
    pub value: i64,
}
