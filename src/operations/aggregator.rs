// Inventory aggregation across every account-scoped item source
use std::collections::{HashMap, HashSet};

use crate::client::AccountApi;
use crate::errors::Result;
use crate::models::*;
use crate::v_debug;
use crate::verbosity::status_line;

pub struct InventoryAggregator<'a> {
    api: &'a dyn AccountApi,
}

impl<'a> InventoryAggregator<'a> {
    pub fn new(api: &'a dyn AccountApi) -> Self {
        Self { api }
    }

    /// Wallet balances for the targeted currencies.
    pub async fn wallet(&self, target_ids: &HashSet<String>) -> Result<Vec<ItemCount>> {
        status_line("[1/8]: Retrieving relevant account wallet currencies...");
        let wallet = self.api.account_wallet().await?;
        Ok(filter_targets(
            wallet.into_iter().map(|entry| ItemCount::new(entry.id, entry.value)),
            target_ids,
        ))
    }

    /// Summed quantity of every targeted item held anywhere on the account:
    /// shared inventory, character bags, bank and material storage.
    /// Ids found in no source are absent from the result.
    pub async fn aggregate(&self, target_ids: &HashSet<String>) -> Result<Vec<ItemCount>> {
        status_line("[3/8]: Retrieving shared account inventory...");
        let shared = filter_targets(occupied(self.api.account_inventory().await?), target_ids);

        status_line("[4/8]: Retrieving character inventories...");
        let characters = filter_targets(self.character_items().await?, target_ids);

        status_line("[5/8]: Retrieving account bank vault...");
        let bank = filter_targets(occupied(self.api.account_bank().await?), target_ids);

        status_line("[6/8]: Retrieving account material storage...");
        let materials = filter_targets(
            self.api
                .account_materials()
                .await?
                .into_iter()
                .flatten()
                .map(|slot| ItemCount::new(slot.id, slot.count)),
            target_ids,
        );

        status_line("[7/8]: Merging all relevant items...");
        let merged = merge_counts(merge_counts(merge_counts(materials, bank), characters), shared);
        v_debug!("📦 {} targeted items held across all sources", merged.len());
        Ok(merged)
    }

    /// Bag contents of every character, summed by id.
    async fn character_items(&self) -> Result<Vec<ItemCount>> {
        let names = self.api.characters().await?;
        let mut items = Vec::new();
        for name in names {
            status_line(&format!("[4/8]: Retrieving character inventory of {}...", name));
            let inventory = self.api.character_inventory(&name).await?;
            items.extend(
                inventory
                    .slots()
                    .map(|slot| ItemCount::new(slot.id, slot.count)),
            );
        }
        Ok(sum_by_id(items))
    }
}

fn occupied(slots: Vec<Option<InventorySlot>>) -> impl Iterator<Item = ItemCount> {
    slots
        .into_iter()
        .flatten()
        .map(|slot| ItemCount::new(slot.id, slot.count))
}

/// Keep only items whose id is a key of the target mapping.
pub fn filter_targets<I>(items: I, target_ids: &HashSet<String>) -> Vec<ItemCount>
where
    I: IntoIterator<Item = ItemCount>,
{
    items
        .into_iter()
        .filter(|item| target_ids.contains(&item.id.to_string()))
        .collect()
}

/// Sum quantities per id, keeping ids in first-seen order.
pub fn sum_by_id<I>(items: I) -> Vec<ItemCount>
where
    I: IntoIterator<Item = ItemCount>,
{
    let mut positions: HashMap<u32, usize> = HashMap::new();
    let mut merged: Vec<ItemCount> = Vec::new();
    for item in items {
        match positions.get(&item.id) {
            Some(&index) => merged[index].count += item.count,
            None => {
                positions.insert(item.id, merged.len());
                merged.push(item);
            }
        }
    }
    merged
}

/// Merge two already-summed lists; ids only in `more` are appended.
pub fn merge_counts(base: Vec<ItemCount>, more: Vec<ItemCount>) -> Vec<ItemCount> {
    sum_by_id(base.into_iter().chain(more))
}
