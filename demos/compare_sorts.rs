//! Rank three ways of sorting the same data.
//!
//! ```text
//! RUST_LOG=perfcmp=debug cargo run --example compare_sorts
//! ```

use perfcmp::{output, Config, Suite};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env_or(Config::quick());
    let mut suite = Suite::with_config(config)?;

    let data: Vec<u64> = (0..20_000u64)
        .map(|i| i.wrapping_mul(2654435761) % 100_000)
        .collect();

    suite.run("sort", || {
        let mut v = data.clone();
        v.sort();
        v
    });
    suite.run("sort_unstable", || {
        let mut v = data.clone();
        v.sort_unstable();
        v
    });
    suite.run("binary_heap", || {
        std::collections::BinaryHeap::from(data.clone()).into_sorted_vec()
    });

    for name in ["sort", "sort_unstable", "binary_heap"] {
        print!("{}", output::format_summary(&suite.summary(name)?));
    }

    let comparison = suite.compare_all()?;
    print!("{}", output::format_comparison(&comparison, &output::DEFAULT_KINDS));

    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", output::to_json_pretty(&comparison)?);
    }

    Ok(())
}
