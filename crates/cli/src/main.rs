use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dchull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::reference::convex_hull_cw;
use dchull::snapshot::Snapshot;
use dchull::{build_hull_with, CollinearPolicy, Hull, HullArena, HullCfg, WalkCap};
use nalgebra::Vector2;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod svg;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "dchull")]
#[command(about = "Divide-and-conquer convex hull: build, render, check")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the hull of a point file and write a JSON result
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        hull: HullArgs,
    },
    /// Render points and hull links to SVG
    Figure {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Fill every hull vertex yellow
        #[arg(long)]
        highlight_hull: bool,
        /// Toggle the highlight of the point nearest to X,Y (repeatable)
        #[arg(long, value_name = "X,Y", value_parser = parse_xy)]
        pick: Vec<(f64, f64)>,
        #[command(flatten)]
        hull: HullArgs,
    },
    /// Write a reproducible random point cloud
    Gen {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = ShapeArg::Square)]
        shape: ShapeArg,
        /// Half side (square) or radius (disk, circle)
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compare the hull against the monotone-chain reference
    Check {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        hull: HullArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy, Debug, Serialize)]
struct HullArgs {
    /// Handling of collinear base-case triples
    #[arg(long, value_enum, default_value_t = CollinearArg::Exclude)]
    collinear: CollinearArg,
    /// Fixed step cap per tangent walk (default: size of both hulls + 1)
    #[arg(long)]
    walk_cap: Option<usize>,
}

impl HullArgs {
    fn cfg(self) -> HullCfg {
        HullCfg {
            collinear: match self.collinear {
                CollinearArg::Exclude => CollinearPolicy::Exclude,
                CollinearArg::Reject => CollinearPolicy::Reject,
            },
            walk_cap: self.walk_cap.map_or(WalkCap::Auto, WalkCap::Fixed),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum CollinearArg {
    Exclude,
    Reject,
}

#[derive(ValueEnum, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum ShapeArg {
    Square,
    Disk,
    Circle,
}

fn parse_xy(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("y: {e}"))?;
    Ok((x, y))
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run { input, out, hull } => run(&input, &out, hull),
        Action::Figure {
            input,
            out,
            highlight_hull,
            pick,
            hull,
        } => figure(&input, &out, highlight_hull, &pick, hull),
        Action::Gen {
            count,
            seed,
            shape,
            scale,
            out,
        } => gen(count, seed, shape, scale, &out),
        Action::Check { input, hull } => check(&input, hull),
        Action::Report => report(),
    }
}

/// Sort, link and build; the arena is returned with its final links.
fn build(points: Vec<Vector2<f64>>, args: HullArgs) -> Result<(HullArena, Hull)> {
    let mut arena = HullArena::from_unsorted(points);
    let hull = build_hull_with(&mut arena, args.cfg()).context("building hull")?;
    tracing::info!(
        points = arena.len(),
        hull = hull.len,
        discarded = hull.discarded.len(),
        merges = hull.merges,
        "hull built"
    );
    Ok((arena, hull))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RunOutput {
    input_points: usize,
    /// Hull vertices, clockwise from the lexicographic minimum.
    hull: Vec<[f64; 2]>,
    /// Indices into `snapshot.points` (sorted order), same traversal.
    hull_ids: Vec<usize>,
    discarded: Vec<usize>,
    merges: usize,
    snapshot: Snapshot,
}

fn run(input: &Path, out: &Path, args: HullArgs) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "run");
    let points = input::load_points(input)?;
    let (arena, hull) = build(points, args)?;
    let result = RunOutput {
        input_points: arena.len(),
        hull: hull
            .positions(&arena)
            .into_iter()
            .map(|p| [p.x, p.y])
            .collect(),
        hull_ids: hull.vertices(&arena).map(|id| id.0).collect(),
        discarded: hull.discarded.iter().map(|id| id.0).collect(),
        merges: hull.merges,
        snapshot: Snapshot::of(&arena),
    };

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new("run", serde_json::to_value(args)?).with_input(input),
    )?;
    Ok(())
}

fn figure(
    input: &Path,
    out: &Path,
    highlight_hull: bool,
    picks: &[(f64, f64)],
    args: HullArgs,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "figure");
    let points = input::load_points(input)?;
    let (mut arena, hull) = build(points, args)?;
    if highlight_hull {
        let ids: Vec<_> = hull.vertices(&arena).collect();
        for id in ids {
            arena.set_highlight(id, true);
        }
    }
    if let Some(bounds) = arena.bounds() {
        let r = svg::point_radius(&bounds);
        for &(x, y) in picks {
            match arena.pick(x, y, r) {
                Some(id) => {
                    let on = arena.toggle_highlight(id);
                    tracing::debug!(x, y, id = id.0, on, "pick");
                }
                None => tracing::warn!(x, y, radius = r, "pick hit no point"),
            }
        }
    }

    ensure_parent(out)?;
    std::fs::write(out, svg::render(&Snapshot::of(&arena)))
        .with_context(|| format!("writing {}", out.display()))?;
    let params = json!({
        "hull": args,
        "highlight_hull": highlight_hull,
        "pick": picks,
    });
    write_sidecar(out, Payload::new("figure", params).with_input(input))?;
    Ok(())
}

fn gen(count: usize, seed: u64, shape: ShapeArg, scale: f64, out: &Path) -> Result<()> {
    tracing::info!(count, seed, ?shape, scale, out = %out.display(), "gen");
    if !scale.is_finite() || scale <= 0.0 {
        bail!("--scale must be positive and finite, got {scale}");
    }
    let shape_cfg = match shape {
        ShapeArg::Square => CloudShape::Square { half: scale },
        ShapeArg::Disk => CloudShape::Disk { radius: scale },
        ShapeArg::Circle => CloudShape::Circle { radius: scale },
    };
    let pts = draw_cloud(
        CloudCfg {
            count,
            shape: shape_cfg,
        },
        ReplayToken { seed, index: 0 },
    );
    ensure_parent(out)?;
    std::fs::write(out, dchull::io::format_points(&pts))
        .with_context(|| format!("writing {}", out.display()))?;
    let params = json!({"count": count, "seed": seed, "shape": shape, "scale": scale});
    write_sidecar(out, Payload::new("gen", params))?;
    Ok(())
}

fn check(input: &Path, args: HullArgs) -> Result<()> {
    let points = input::load_points(input)?;
    let expected = convex_hull_cw(&points);
    let (arena, hull) = build(points, args)?;
    let got = hull.positions(&arena);
    if got != expected {
        tracing::error!(got = ?got, expected = ?expected, "hull mismatch");
        bail!(
            "hull mismatch: built {} vertices, reference has {}",
            got.len(),
            expected.len()
        );
    }
    if !arena.links_consistent() {
        bail!("inconsistent cw/ccw links after build");
    }
    println!("ok: {} vertices, {} points discarded", hull.len, hull.discarded.len());
    Ok(())
}

fn report() -> Result<()> {
    let cfg = HullCfg::default();
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": dchull::VERSION,
        "defaults": {
            "collinear": format!("{:?}", cfg.collinear),
            "walk_cap": format!("{:?}", cfg.walk_cap),
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn default_args() -> HullArgs {
        HullArgs {
            collinear: CollinearArg::Exclude,
            walk_cap: None,
        }
    }

    #[test]
    fn parse_xy_accepts_pairs() {
        assert_eq!(parse_xy("1.5, -2"), Ok((1.5, -2.0)));
        assert!(parse_xy("1.5").is_err());
        assert!(parse_xy("a,2").is_err());
    }

    #[test]
    fn hull_args_map_onto_cfg() {
        let cfg = HullArgs {
            collinear: CollinearArg::Reject,
            walk_cap: Some(7),
        }
        .cfg();
        assert_eq!(cfg.collinear, CollinearPolicy::Reject);
        assert_eq!(cfg.walk_cap, WalkCap::Fixed(7));
        assert_eq!(default_args().cfg().walk_cap, WalkCap::Auto);
    }

    #[test]
    fn run_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.txt");
        fs::write(&input, "0 0\n4 0\n4 4\n0 4\n2 2\n").unwrap();
        let out = dir.path().join("out/hull.json");
        run(&input, &out, default_args()).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(v["input_points"], 5);
        assert_eq!(v["hull"], json!([[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0]]));
        assert_eq!(v["discarded"], json!([2]));
        assert_eq!(v["snapshot"]["points"][2]["cw"], serde_json::Value::Null);
        assert!(dir.path().join("out/hull.provenance.json").exists());
    }

    #[test]
    fn gen_then_check_agrees_with_reference() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("cloud.txt");
        gen(300, 11, ShapeArg::Disk, 5.0, &pts).unwrap();
        assert_eq!(fs::read_to_string(&pts).unwrap().lines().count(), 300);
        check(&pts, default_args()).unwrap();
    }

    #[test]
    fn figure_writes_svg() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tri.txt");
        fs::write(&input, "0 0\n1 2\n2 0\n1 0.5\n").unwrap();
        let out = dir.path().join("tri.svg");
        figure(&input, &out, false, &[(1.0, 0.5)], default_args()).unwrap();
        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("fill=\"yellow\"").count(), 1);
    }

    #[test]
    fn reject_policy_fails_on_collinear_base_case() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("line.txt");
        fs::write(&input, "0 0\n1 1\n2 2\n").unwrap();
        let args = HullArgs {
            collinear: CollinearArg::Reject,
            walk_cap: None,
        };
        let err = check(&input, args).unwrap_err();
        assert!(format!("{err:#}").contains("collinear"));
    }
}
