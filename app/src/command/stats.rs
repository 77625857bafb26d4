use medterm_core::dictionary::{index_len, mappings};
use medterm_core::{CitationKey, EntityKey};
use medterm_engine::CacheStats;

use super::Context;

/// Strategy for displaying dictionary sizes and cache settings.
///
/// Caches live only as long as the process, so a fresh run shows the
/// configured limits with empty counters.
#[derive(Debug, Clone, Copy)]
pub struct StatsStrategy;

impl super::CommandStrategy for StatsStrategy {
    type Input = Context;

    fn execute(&self, ctx: Self::Input) -> anyhow::Result<()> {
        let stats = ctx.engine.get_cache_stats();

        println!("=== medterm Statistics ===\n");

        println!("Dictionary:");
        println!("  Concepts: {}", mappings().len());
        println!("  Indexed surface forms: {}", index_len());
        println!("  Entities: {}", EntityKey::COUNT);
        println!("  Citations: {}", CitationKey::COUNT);
        println!();

        print_cache("Annotation Cache", &stats.annotation);
        print_cache("Schema Cache", &stats.schema);

        println!("Compiled pattern tables: {}", stats.compiled_locales);
        println!("Log level: {}", ctx.config.logging.level());

        Ok(())
    }
}

fn print_cache(title: &str, stats: &CacheStats) {
    println!("{title}:");
    println!("  Entries: {}/{}", stats.entries, stats.max_entries);
    println!("  TTL: {:?}", stats.ttl);
    println!(
        "  Hits/Misses/Evictions: {}/{}/{}",
        stats.hits, stats.misses, stats.evictions
    );
    println!();
}
