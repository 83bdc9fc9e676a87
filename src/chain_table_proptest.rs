#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they can reach the
// core directly and compare it against std's HashMap.

use crate::chain_table::ChainTable;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Clear,
    Snapshot,
}

fn arb_scenario(key: &'static str) -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec(key, 1..=40).prop_flat_map(move |pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![contains_pool.prop_map(|s: String| s), key.prop_map(|s| s)]
                .prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Snapshot),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run(pool: Vec<String>, ops: Vec<OpI>) -> Result<(), TestCaseError> {
    let mut sut: ChainTable<i32> = ChainTable::new();
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut last_cap = sut.capacity();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = pool[i].clone();
                let prev = sut.insert(k.clone(), v).unwrap();
                prop_assert_eq!(prev, model.insert(k, v));
                // Load factor stays below 0.75 after every insert.
                prop_assert!(sut.len() * 4 < sut.capacity() * 3);
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                let removed = sut.remove_entry(k).unwrap();
                let expected = model.remove(k).map(|v| (k.clone(), v));
                prop_assert_eq!(removed, expected);
                prop_assert!(!sut.contains_key(k).unwrap());
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k).unwrap(), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s).unwrap(), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                if let Some(vr) = sut.get_mut(k).unwrap() {
                    *vr = vr.saturating_add(d);
                    let mv = model.get_mut(k).expect("present in model");
                    *mv = mv.saturating_add(d);
                } else {
                    prop_assert!(!model.contains_key(k));
                }
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
            }
            OpI::Snapshot => {
                let keys = sut.keys();
                let unique: BTreeSet<_> = keys.iter().cloned().collect();
                prop_assert_eq!(unique.len(), keys.len(), "duplicate key in table");
                let m_keys: BTreeSet<_> = model.keys().cloned().collect();
                prop_assert_eq!(unique, m_keys);
                let entries: BTreeSet<_> = sut.entries().into_iter().collect();
                let m_entries: BTreeSet<_> = model.clone().into_iter().collect();
                prop_assert_eq!(entries, m_entries);
            }
        }

        // Post-conditions after each op
        // 1) Size parity, with the chain walk agreeing with bucket sizes
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.bucket_sizes().iter().sum::<usize>(), model.len());
        // 2) Capacity only ever doubles
        let cap = sut.capacity();
        prop_assert!(cap == last_cap || cap == last_cap * 2);
        prop_assert_eq!(sut.bucket_sizes().len(), cap);
        last_cap = cap;
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Insert overwrites in place and reports the replaced value.
// - `get`/`contains_key` parity with the model, across resizes.
// - `remove_entry` returns the owned pair matching the model.
// - Snapshots list each live entry exactly once.
// - Load factor, `len` and capacity growth after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario("[a-z ]{0,6}")) {
        run(pool, ops)?;
    }
}

// Keys over {a, q} of equal length all share a bucket at capacity 16
// ('a' = 97 and 'q' = 113 agree mod 16), so chains get long and every
// splice position is exercised.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario("[aq]{1,4}")) {
        run(pool, ops)?;
    }
}
