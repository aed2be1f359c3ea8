//! Walks each eviction policy through the same short script.
//!
//! Evictions print `DISCARD: <key>` and each stage ends with the sorted cache
//! listing.
//!
//! Run with: cargo run --example policy_tour

use boundcache::builder::CacheBuilder;
use boundcache::observer::WriterObserver;
use boundcache::policy::PolicyKind;
use boundcache::{BasicCache, DEFAULT_CAPACITY};

fn main() {
    println!("=== BasicCache (no eviction) ===\n");
    let mut basic = BasicCache::new();
    basic.put("A", "Hello");
    basic.put("B", "World");
    basic.put("C", "Cache");
    basic.put_opt(None, Some("ignored"));
    print!("{}", basic.listing());
    println!("  get(D) -> {:?}\n", basic.get(&"D"));

    for kind in PolicyKind::ALL {
        println!("=== {} (capacity {}) ===\n", kind, DEFAULT_CAPACITY);

        let mut cache = CacheBuilder::new(DEFAULT_CAPACITY)
            .observer(WriterObserver::stdout())
            .build::<&str, &str>(kind);

        cache.put("A", "Hello");
        cache.put("B", "World");
        cache.put("C", "Cache");
        cache.put("D", "School");
        print!("{}", cache.listing());

        // Touch A so the read-aware policies have something to react to.
        cache.get(&"A");
        cache.put("E", "Battery");
        print!("{}", cache.listing());

        // An overwrite never evicts. LIFO, LRU and LFU treat it as a touch.
        cache.put("C", "Street");
        cache.put("F", "Mission");
        print!("{}", cache.listing());

        println!("  next victim -> {:?}\n", cache.next_victim());
    }
}
