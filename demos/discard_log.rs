//! Structured eviction logging through `tracing`.
//!
//! The policy comes from the first argument (default `lru`). Set `RUST_LOG`
//! to `boundcache=trace` to also see the cache's own per-eviction events.
//!
//! Run with: cargo run --example discard_log -- lfu

use boundcache::builder::{CacheBuilder, CacheConfig};
use boundcache::observer::LogObserver;
use boundcache::policy::PolicyKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let policy = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<PolicyKind>() {
            Ok(kind) => kind,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            },
        },
        None => PolicyKind::default(),
    };
    let config = CacheConfig {
        policy,
        ..CacheConfig::default()
    };

    let mut cache = match CacheBuilder::from_config(&config) {
        Ok(builder) => builder
            .observer(LogObserver::named("demo"))
            .build::<u32, String>(config.policy),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        },
    };
    info!(policy = %config.policy, capacity = config.capacity, "cache ready");

    for i in 0..10u32 {
        cache.put(i, format!("value-{}", i));
        if i % 3 == 0 {
            cache.get(&(i / 2));
        }
    }

    info!(len = cache.len(), "done");
    print!("{}", cache.listing());
}
