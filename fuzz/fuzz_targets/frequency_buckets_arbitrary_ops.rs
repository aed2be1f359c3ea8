#![no_main]

use boundcache::ds::FrequencyBuckets;
use libfuzzer_sys::fuzz_target;

// Fuzz insert/touch/remove/pop_min sequences on FrequencyBuckets
fuzz_target!(|data: &[u8]| {
    let mut buckets: FrequencyBuckets<u8> = FrequencyBuckets::new();

    for pair in data.chunks_exact(2) {
        let key = pair[1] % 32;
        match pair[0] % 4 {
            0 => {
                if buckets.insert(key) {
                    assert_eq!(buckets.frequency(&key), Some(1));
                    assert_eq!(buckets.min_freq(), Some(1));
                }
            }
            1 => {
                let before = buckets.frequency(&key);
                let after = buckets.touch(&key);
                assert_eq!(after, before.map(|f| f + 1));
            }
            2 => {
                let before = buckets.frequency(&key);
                assert_eq!(buckets.remove(&key), before);
            }
            _ => {
                let min = buckets.min_freq();
                let peeked = buckets.peek_min().map(|(k, f)| (*k, f));
                let popped = buckets.pop_min();
                assert_eq!(peeked, popped);
                if let Some((_, freq)) = popped {
                    assert_eq!(Some(freq), min);
                }
            }
        }
    }

    buckets.debug_validate_invariants();
});
