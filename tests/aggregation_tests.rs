mod common;

use common::*;
use gw2_tracker::operations::{filter_targets, merge_counts, sum_by_id, InventoryAggregator};
use gw2_tracker::{ItemCount, WalletEntry};
use std::collections::HashSet;

fn targets(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn count_of(items: &[ItemCount], id: u32) -> Option<i64> {
    items.iter().find(|item| item.id == id).map(|item| item.count)
}

#[tokio::test]
async fn test_sums_every_source() {
    let mut account = MockAccount::new()
        .with_character("Alpha", vec![bag(vec![slot(111, 3), None, slot(111, 4)]), None])
        .with_character("Beta Gamma", vec![bag(vec![slot(111, 1)]), bag(vec![slot(222, 9)])]);
    account.shared = vec![slot(111, 10), None];
    account.bank = vec![None, slot(111, 5), slot(222, 2)];
    account.materials = vec![material(111, 250), material(333, 17)];

    let aggregator = InventoryAggregator::new(&account);
    let merged = aggregator.aggregate(&targets(&["111", "222"])).await.unwrap();

    assert_eq!(count_of(&merged, 111), Some(250 + 5 + 3 + 4 + 1 + 10));
    assert_eq!(count_of(&merged, 222), Some(2 + 9));
    assert_eq!(merged.len(), 2, "untargeted 333 must be filtered out");
}

#[tokio::test]
async fn test_shared_and_bank_only() {
    let mut account = MockAccount::new();
    account.shared = vec![slot(111, 10)];
    account.bank = vec![slot(111, 5)];

    let merged = InventoryAggregator::new(&account)
        .aggregate(&targets(&["111"]))
        .await
        .unwrap();

    assert_eq!(merged, vec![ItemCount::new(111, 15)]);
}

#[tokio::test]
async fn test_single_source_keeps_its_value() {
    let mut account = MockAccount::new();
    account.materials = vec![material(444, 42)];

    let merged = InventoryAggregator::new(&account)
        .aggregate(&targets(&["444", "555"]))
        .await
        .unwrap();

    assert_eq!(merged, vec![ItemCount::new(444, 42)]);
    assert_eq!(count_of(&merged, 555), None, "ids held nowhere are absent, not zero");
}

#[tokio::test]
async fn test_aggregation_is_repeatable() {
    let mut account = MockAccount::new().with_character("Alpha", vec![bag(vec![slot(111, 2)])]);
    account.shared = vec![slot(222, 1)];
    account.materials = vec![material(111, 7)];
    let wanted = targets(&["111", "222"]);

    let aggregator = InventoryAggregator::new(&account);
    let first = aggregator.aggregate(&wanted).await.unwrap();
    let second = aggregator.aggregate(&wanted).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(account.materials, vec![material(111, 7)]);
}

#[tokio::test]
async fn test_source_failure_aborts() {
    let mut account = MockAccount::new();
    account.shared = vec![slot(111, 10)];
    account.failing = Some("account/bank");

    let result = InventoryAggregator::new(&account).aggregate(&targets(&["111"])).await;
    assert!(result.is_err(), "a failed fetch must not yield a partial result");
}

#[tokio::test]
async fn test_wallet_filters_to_targets() {
    let mut account = MockAccount::new();
    account.wallet = vec![
        WalletEntry { id: 1, value: 5_000_000 },
        WalletEntry { id: 2, value: 12 },
        WalletEntry { id: 23, value: 400 },
    ];

    let wallet = InventoryAggregator::new(&account)
        .wallet(&targets(&["2", "23"]))
        .await
        .unwrap();

    assert_eq!(wallet, vec![ItemCount::new(2, 12), ItemCount::new(23, 400)]);
}

#[test]
fn test_merge_keeps_first_seen_order() {
    let merged = merge_counts(
        vec![ItemCount::new(3, 1), ItemCount::new(1, 1)],
        vec![ItemCount::new(2, 5), ItemCount::new(3, 4)],
    );
    assert_eq!(
        merged,
        vec![ItemCount::new(3, 5), ItemCount::new(1, 1), ItemCount::new(2, 5)]
    );
}

#[test]
fn test_sum_by_id_and_filter() {
    let summed = sum_by_id(vec![
        ItemCount::new(7, 1),
        ItemCount::new(7, 2),
        ItemCount::new(8, 3),
    ]);
    assert_eq!(summed, vec![ItemCount::new(7, 3), ItemCount::new(8, 3)]);

    let filtered = filter_targets(summed, &targets(&["8"]));
    assert_eq!(filtered, vec![ItemCount::new(8, 3)]);
}
