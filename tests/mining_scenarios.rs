use itemset_miner::fp::streaming::{
    build_pass, count_pass, finalize_building, finalize_counts, mine_patterns,
};
use itemset_miner::{
    group_by_size, mine, FPGrowthMiner, FrequentPattern, ItemSupportList, MinerConfig,
    MiningError, StreamingState,
};

/// Client classes and the server methods each one calls.
fn client_usage() -> Vec<ItemSupportList> {
    vec![
        ItemSupportList::transaction("OrderView", ["getId", "getTotal", "getLines"], 1.0),
        ItemSupportList::transaction("InvoicePrinter", ["getId", "getTotal", "getCustomer"], 1.0),
        ItemSupportList::transaction("OrderAudit", ["getId", "getLines"], 1.0),
        ItemSupportList::transaction("Shipping", ["getId", "getCustomer", "getAddress"], 1.0),
        ItemSupportList::transaction("Billing", ["getTotal", "getCustomer"], 2.0),
    ]
}

fn support_of(patterns: &[FrequentPattern], items: &[&str]) -> Option<f64> {
    patterns
        .iter()
        .find(|p| p.items.len() == items.len() && items.iter().all(|item| p.contains(item)))
        .map(|p| p.support)
}

#[test]
fn mines_method_groups_used_together() {
    let config = MinerConfig::from_toml_str("min_support = 2").unwrap();
    let miner = FPGrowthMiner::from_config(config).unwrap();
    let patterns = miner.mine(&client_usage()).unwrap();

    assert_eq!(support_of(&patterns, &["getId"]), Some(4.0));
    assert_eq!(support_of(&patterns, &["getTotal"]), Some(4.0));
    assert_eq!(support_of(&patterns, &["getCustomer"]), Some(4.0));
    assert_eq!(support_of(&patterns, &["getTotal", "getCustomer"]), Some(3.0));
    assert_eq!(support_of(&patterns, &["getId", "getLines"]), Some(2.0));
    assert_eq!(support_of(&patterns, &["getId", "getTotal"]), Some(2.0));
    assert_eq!(support_of(&patterns, &["getId", "getCustomer"]), Some(2.0));

    // Single occurrences stay out
    assert_eq!(support_of(&patterns, &["getAddress"]), None);
    assert_eq!(support_of(&patterns, &["getId", "getTotal", "getCustomer"]), None);
    assert_eq!(support_of(&patterns, &["getLines", "getTotal"]), None);
}

#[test]
fn levels_group_patterns_by_size() {
    let miner = FPGrowthMiner::new(2).unwrap();
    let levels = group_by_size(&miner.mine(&client_usage()).unwrap());

    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].itemset_size, 1);
    assert_eq!(levels[0].len(), 4);
    assert_eq!(levels[1].itemset_size, 2);
    assert_eq!(levels[1].len(), 4);
}

#[test]
fn streaming_batches_match_a_single_call() {
    let usage = client_usage();
    let (first, second) = usage.split_at(2);

    let mut state = StreamingState::new();
    count_pass(&mut state, first).unwrap();
    count_pass(&mut state, second).unwrap();
    finalize_counts(&mut state, MinerConfig::new(2)).unwrap();
    build_pass(&mut state, first).unwrap();
    build_pass(&mut state, second).unwrap();
    finalize_building(&mut state).unwrap();

    let mut streamed = mine_patterns(&state).unwrap();
    let mut direct = FPGrowthMiner::new(2).unwrap().mine(&usage).unwrap();
    let by_items = |a: &FrequentPattern, b: &FrequentPattern| a.items.cmp(&b.items);
    streamed.sort_by(by_items);
    direct.sort_by(by_items);
    assert_eq!(streamed, direct);
}

#[test]
fn patterns_serialize_for_export() {
    let patterns = FPGrowthMiner::new(3).unwrap().mine(&client_usage()).unwrap();
    let json = serde_json::to_string(&patterns).unwrap();
    let restored: Vec<FrequentPattern> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, patterns);
}

#[test]
fn transactions_round_trip_through_json() {
    let usage = client_usage();
    let json = serde_json::to_string(&usage).unwrap();
    let restored: Vec<ItemSupportList> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, usage);
}

#[test]
fn inconsistent_transactions_are_rejected_on_load() {
    let missing =
        serde_json::from_str::<ItemSupportList>(r#"{"name":"T","items":["a"],"supports":{}}"#);
    assert!(missing.unwrap_err().to_string().contains("has no support"));

    let repeated = serde_json::from_str::<ItemSupportList>(
        r#"{"name":"T","items":["a","a"],"supports":{"a":1.0}}"#,
    );
    assert!(repeated.unwrap_err().to_string().contains("more than once"));

    let stray = serde_json::from_str::<ItemSupportList>(
        r#"{"name":"T","items":["a"],"supports":{"a":1.0,"b":1.0}}"#,
    );
    assert!(stray.is_err());
}

#[test]
fn loaded_transactions_mine_like_built_ones() {
    let loaded: ItemSupportList =
        serde_json::from_str(r#"{"items":["a","b"],"supports":{"b":2.0,"a":2.0}}"#).unwrap();
    assert_eq!(loaded.items(), &["a", "b"]);

    let patterns = mine(&[loaded], 2).unwrap();
    assert_eq!(patterns.len(), 3);
    assert!(patterns.iter().all(|p| p.support == 2.0));
}

#[test]
fn config_errors_surface_before_mining() {
    let err = FPGrowthMiner::from_config(MinerConfig::new(-5)).unwrap_err();
    assert!(matches!(err, MiningError::NegativeMinSupport(-5)));
    assert_eq!(err.to_string(), "minimum support must not be negative, got -5");
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_mining_matches_sequential() {
    let sequential = FPGrowthMiner::new(2).unwrap().mine(&client_usage()).unwrap();
    let parallel = FPGrowthMiner::from_config(MinerConfig::new(2).with_parallel(true))
        .unwrap()
        .mine(&client_usage())
        .unwrap();
    assert_eq!(parallel, sequential);
}
