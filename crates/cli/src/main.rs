use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hulls::rand::{draw_ring_with_cluster, draw_uniform_box, ReplayToken, RingCfg};
use hulls::{concave_hull, convex_hull, order_around_centroid};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

use io::{read_points, write_json, HullDoc, PointsDoc, XY, DEFAULT_ALPHA};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex and concave hulls of 2D point sets")]
struct Cmd {
    /// Log at debug level (degenerate-input notices included)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull, CCW from the lowest point
    Convex {
        /// Points JSON file, or `-` for stdin
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
    },
    /// Concave hull (alpha shape), points in input-index order
    Concave {
        #[arg(long)]
        input: String,
        /// Overrides the request's `alpha`
        #[arg(long)]
        alpha: Option<f64>,
        /// Reorder the boundary around its centroid for drawing
        #[arg(long)]
        ordered: bool,
        #[arg(long)]
        out: Option<String>,
    },
    /// Write a reproducible point cloud usable as `--input`
    Sample {
        #[arg(long, value_enum, default_value_t = SampleKind::Ring)]
        kind: SampleKind,
        #[arg(long, default_value_t = 32)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print version information as JSON
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SampleKind {
    /// Circle of points around a small central cluster
    Ring,
    /// Uniform points in [-1, 1]²
    Box,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Convex { input, out } => {
            let doc = read_points(&input)?;
            tracing::info!(input, n = doc.points.len(), "convex");
            write_json(&convex(&doc), out.as_deref())
        }
        Action::Concave {
            input,
            alpha,
            ordered,
            out,
        } => {
            let doc = read_points(&input)?;
            tracing::info!(input, n = doc.points.len(), alpha = ?alpha, ordered, "concave");
            write_json(&concave(&doc, alpha, ordered), out.as_deref())
        }
        Action::Sample {
            kind,
            n,
            seed,
            index,
            out,
        } => {
            tracing::info!(kind = ?kind, n, seed, index, "sample");
            write_json(&sample(kind, n, ReplayToken::new(seed, index)), out.as_deref())
        }
        Action::Report => report(),
    }
}

fn convex(doc: &PointsDoc) -> HullDoc {
    let hull = convex_hull(&doc.points());
    tracing::debug!(hull = hull.len(), "convex hull computed");
    HullDoc::from_points(&hull)
}

fn concave(doc: &PointsDoc, alpha: Option<f64>, ordered: bool) -> HullDoc {
    // A request alpha of 0 or NaN counts as unset; the flag is taken as given.
    let requested = doc.alpha.filter(|a| *a != 0.0 && !a.is_nan());
    let alpha = alpha.or(requested).unwrap_or(DEFAULT_ALPHA);
    let mut hull = concave_hull(&doc.points(), alpha);
    if ordered {
        hull = order_around_centroid(&hull);
    }
    tracing::debug!(alpha, hull = hull.len(), "concave hull computed");
    HullDoc::from_points(&hull)
}

fn sample(kind: SampleKind, n: usize, tok: ReplayToken) -> PointsDoc {
    let pts = match kind {
        SampleKind::Ring => {
            let cluster = n / 4;
            let cfg = RingCfg {
                ring_count: n - cluster,
                cluster_count: cluster,
                angle_jitter_frac: 0.25,
                ..RingCfg::default()
            };
            draw_ring_with_cluster(cfg, tok)
        }
        SampleKind::Box => draw_uniform_box(n, 1.0, tok),
    };
    PointsDoc {
        points: pts.iter().map(XY::from).collect(),
        alpha: None,
    }
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "cli": env!("CARGO_PKG_VERSION"),
        "hulls": hulls::VERSION,
        "default_alpha": DEFAULT_ALPHA,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
