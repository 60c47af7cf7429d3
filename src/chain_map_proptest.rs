// Property tests for ChainMap kept inside the crate so they can check
// chain structure against a model.

use crate::{Bucket, ChainMap, Handle, BUCKETS};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations so shrinking moves toward earlier keys.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Get(usize, i32),
    Find(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,12}", 1..=10).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Get(i, d)),
            idx.clone().prop_map(OpI::Find),
            prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - One entry per distinct key holding the most recent value.
// - `get` returns the stored value or the default; `find` parity with the model.
// - Handles are stable across updates.
// - Each chain holds its bucket's keys in first-insertion order.
// - Iteration visits every entry once, bucket-ascending; `size` parity.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut = ChainMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut live: HashMap<String, Handle> = HashMap::new();
        let mut order: Vec<Vec<String>> = vec![Vec::new(); BUCKETS];

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let k = &pool[i];
                    let h = sut.put(k.as_str(), v).expect("put");
                    match live.get(k) {
                        Some(&prev) => prop_assert_eq!(prev, h, "update must keep its handle"),
                        None => {
                            live.insert(k.clone(), h);
                            order[Bucket::of(k.as_str()).index()].push(k.clone());
                        }
                    }
                    model.insert(k.clone(), v);
                }
                OpI::Get(i, d) => {
                    let k = &pool[i];
                    let expected = model.get(k).copied().unwrap_or(d);
                    prop_assert_eq!(sut.get(k.as_str(), d), expected);
                }
                OpI::Find(i) => {
                    let k = &pool[i];
                    let found = sut.find(k, sut.bucket_of(k.as_str()));
                    prop_assert_eq!(found, live.get(k).copied());
                    if let Some(h) = found {
                        prop_assert_eq!(h.key(&sut), Some(k.as_str()));
                        prop_assert_eq!(h.value(&sut), model.get(k).copied());
                    }
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    if let Some(&h) = live.get(k) {
                        let vr = h.value_mut(&mut sut).expect("live handle should resolve");
                        *vr = vr.saturating_add(d);
                        if let Some(mv) = model.get_mut(k) {
                            *mv = mv.saturating_add(d);
                        }
                    }
                }
                OpI::Iterate => {
                    let seen: Vec<_> = sut.iter().map(|(_, k, _)| k.to_string()).collect();
                    let expected: Vec<_> = order.iter().flatten().cloned().collect();
                    prop_assert_eq!(&seen, &expected);
                    let unique: BTreeSet<_> = seen.iter().collect();
                    prop_assert_eq!(unique.len(), seen.len());
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.size(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            for b in Bucket::all() {
                let keys: Vec<_> = sut.chain(b).map(|(_, k, _)| k.to_string()).collect();
                prop_assert_eq!(&keys, &order[b.index()]);
                let mut back: Vec<_> = sut.chain(b).rev().map(|(_, k, _)| k.to_string()).collect();
                back.reverse();
                prop_assert_eq!(&back, &keys);
            }
        }
    }
}
