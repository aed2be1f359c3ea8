#![no_main]

use boundcache::builder::{Cache, CacheBuilder};
use boundcache::observer::RecordingObserver;
use boundcache::policy::PolicyKind;
use libfuzzer_sys::fuzz_target;

// Fuzz put/get/remove sequences across every policy
//
// Byte 0 picks the policy, byte 1 the capacity; the rest are (op, key) pairs.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let kind = PolicyKind::ALL[usize::from(data[0]) % PolicyKind::ALL.len()];
    let capacity = usize::from(data[1] % 8) + 1;
    let evicted = RecordingObserver::new();
    let mut cache: Cache<u8, u8, _> = CacheBuilder::new(capacity)
        .observer(evicted.clone())
        .build(kind);

    for pair in data[2..].chunks_exact(2) {
        let key = pair[1] % 24;
        match pair[0] % 4 {
            0 => {
                let was_full = cache.len() == capacity;
                let was_present = cache.contains(&key);
                let before = evicted.len();
                cache.put(key, pair[0]);
                assert_eq!(cache.get(&key), Some(&pair[0]));
                let expected = usize::from(was_full && !was_present);
                assert_eq!(evicted.len(), before + expected);
            }
            1 => {
                let present = cache.contains(&key);
                assert_eq!(cache.get(&key).is_some(), present);
            }
            2 => {
                cache.remove(&key);
                assert!(!cache.contains(&key));
            }
            _ => {
                cache.put_opt(None, Some(key));
                cache.put_opt(Some(key), None);
            }
        }
        assert!(cache.len() <= capacity);
    }
});
