// Item resolver - attaches display names to counted items
use crate::client::AccountApi;
use crate::errors::Result;
use crate::models::*;

pub struct ItemResolver<'a> {
    api: &'a dyn AccountApi,
}

impl<'a> ItemResolver<'a> {
    pub fn new(api: &'a dyn AccountApi) -> Self {
        Self { api }
    }

    /// Look up the localized name for one id. Lookup failures propagate;
    /// nothing is cached between calls.
    pub async fn resolve(&self, kind: ItemKind, id: u32, quantity: i64) -> Result<ResolvedItem> {
        let name = match kind {
            ItemKind::Currency => self.api.currency(id).await?.name,
            ItemKind::Material => self.api.item(id).await?.name,
        };
        Ok(ResolvedItem { id, name, value: quantity })
    }

    pub async fn resolve_all(&self, kind: ItemKind, items: &[ItemCount]) -> Result<Vec<ResolvedItem>> {
        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            resolved.push(self.resolve(kind, item.id, item.count).await?);
        }
        Ok(resolved)
    }
}
