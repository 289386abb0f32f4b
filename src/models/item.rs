use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Currency {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
