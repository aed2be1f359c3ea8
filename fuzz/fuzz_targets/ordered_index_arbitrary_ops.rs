#![no_main]

use boundcache::ds::{IndexMode, OrderedIndex};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on OrderedIndex
//
// The first byte picks the mode; every following pair is (op, key).
fuzz_target!(|data: &[u8]| {
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    let mode = if mode % 2 == 0 {
        IndexMode::Sequence
    } else {
        IndexMode::Frequency
    };
    let mut index: OrderedIndex<u8> = OrderedIndex::new(mode);

    for pair in rest.chunks_exact(2) {
        let key = pair[1] % 32;
        match pair[0] % 5 {
            0 => {
                let was_present = index.contains(&key);
                let added = index.record_insertion(key);
                assert_eq!(added, !was_present);
                assert!(index.contains(&key));
                if added {
                    assert_eq!(index.newest(), Some(&key));
                }
            }
            1 => {
                let before = index.frequency(&key);
                if index.touch(&key) {
                    assert_eq!(index.newest(), Some(&key));
                    if let Some(freq) = before {
                        assert_eq!(index.frequency(&key), Some(freq + 1));
                    }
                }
            }
            2 => {
                let len = index.len();
                if index.remove(&key) {
                    assert_eq!(index.len(), len - 1);
                    assert!(!index.contains(&key));
                }
            }
            3 => {
                if let Some(victim) = index.peek_min_frequency() {
                    let min = index.min_frequency();
                    assert_eq!(index.frequency(victim), min);
                }
            }
            _ => {
                if key == 0 {
                    index.clear();
                    assert!(index.is_empty());
                }
            }
        }
        assert_eq!(index.iter().count(), index.len());
    }

    index.debug_validate_invariants();
});
