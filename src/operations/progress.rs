// Progress calculator - compares held quantities with the targets
use std::collections::BTreeMap;

use crate::models::*;
use crate::v_error;

/// Progress of one item toward its required quantity.
///
/// Completed items sort by `value * 100`, incomplete ones by their raw
/// percentage, so any finished item with `needed >= 1` outranks every
/// unfinished one. A non-positive `needed` counts as already complete; a
/// finished row holding nothing still sorts as if it held one.
pub fn compute_stat(needed: i64, item: &ResolvedItem) -> ProgressStat {
    let progress_percent = if needed <= 0 {
        100.0
    } else {
        item.value as f64 / needed as f64 * 100.0
    };
    let done = progress_percent >= 100.0;
    let sort_key = if done {
        item.value.max(1) as f64 * 100.0
    } else {
        progress_percent
    };

    ProgressStat {
        name: item.name.clone(),
        value: format!("{}/{}", item.value, needed),
        progress: format!("{:>6.2}%", progress_percent.min(100.0)),
        done,
        color: if done { ProgressColor::Green } else { ProgressColor::Red },
        sort_key,
    }
}

/// Stats for every resolved item, in input order.
pub fn compute_stats(target: &BTreeMap<String, i64>, items: &[ResolvedItem]) -> Vec<ProgressStat> {
    items
        .iter()
        .filter_map(|item| match target.get(&item.id.to_string()) {
            Some(&needed) => Some(compute_stat(needed, item)),
            None => {
                // Items are filtered to the target keys before resolution.
                v_error!("❌ Item {} ({}) has no target quantity, skipping", item.id, item.name);
                None
            }
        })
        .collect()
}
