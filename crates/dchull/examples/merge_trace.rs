//! Print every merge of a small random build: depth, range, tangents, discards.
//!
//! Usage:
//!   cargo run -p dchull --example merge_trace -- [count] [seed]

use dchull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::{HullArena, HullBuilder, HullCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(16);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let pts = draw_cloud(
        CloudCfg {
            count,
            shape: CloudShape::Disk { radius: 10.0 },
        },
        ReplayToken { seed, index: 0 },
    );
    let mut arena = HullArena::from_unsorted(pts);
    let result = HullBuilder::new(HullCfg::default())
        .with_observer(|t| {
            let pad = "  ".repeat(t.depth);
            println!(
                "{pad}merge {:?}: upper {}-{}  lower {}-{}  discarded {:?}  hull {}",
                t.range,
                t.outcome.upper.left.0,
                t.outcome.upper.right.0,
                t.outcome.lower.left.0,
                t.outcome.lower.right.0,
                t.outcome.discarded.iter().map(|p| p.0).collect::<Vec<_>>(),
                t.cycle.len(),
            );
        })
        .build(&mut arena);
    match result {
        Ok(hull) => {
            println!("hull ({} of {count} points, {} merges):", hull.len, hull.merges);
            for p in hull.positions(&arena) {
                println!("  {:>8.3} {:>8.3}", p.x, p.y);
            }
        }
        Err(e) => eprintln!("build failed: {e}"),
    }
}
