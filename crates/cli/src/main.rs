use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::api::{Circle, Point, Rect, Segment};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod coords;
mod provenance;
mod report;

use coords::parse_point;
use report::{LineProbe, Report};

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Query points, segments, circles and rectangles")]
struct Cmd {
    /// Optional label; propagated to reports and sidecars
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Tolerance for the tolerant point-on-segment check
    #[arg(long, global = true, default_value_t = 1e-9)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render a point
    Point {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        at: Point,
    },
    /// Segment queries: length, slope, split, interpolation, membership
    Line {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
        /// Report find_y at this x
        #[arg(long, allow_hyphen_values = true)]
        at_x: Option<f64>,
        /// Report find_x at this y
        #[arg(long, allow_hyphen_values = true)]
        at_y: Option<f64>,
        /// Report whether this point lies on the segment
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        probe: Option<Point>,
    },
    /// Circle area, perimeter and membership
    Circle {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        centre: Point,
        radius: f64,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        probe: Option<Point>,
    },
    /// Rectangle measures and membership from two diagonal corners
    Rect {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        probe: Option<Point>,
    },
    /// Derive segment columns for a CSV of `xa,ya,xb,yb` rows
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    match cmd.action {
        Action::Point { at } => {
            tracing::info!(%at, "point");
            print_report(report::point(at, tag))
        }
        Action::Line {
            a,
            b,
            at_x,
            at_y,
            probe,
        } => {
            let line = Segment::new(a, b);
            tracing::info!(%line, at_x, at_y, probe = ?probe, eps = cmd.eps, "line");
            let probe = LineProbe {
                at_x,
                at_y,
                point: probe,
                eps: cmd.eps,
            };
            print_report(report::line(line, &probe, tag))
        }
        Action::Circle {
            centre,
            radius,
            probe,
        } => {
            let circle = Circle::new(centre, radius);
            tracing::info!(%circle, probe = ?probe, "circle");
            print_report(report::circle(circle, probe, tag))
        }
        Action::Rect { a, b, probe } => {
            let rect = Rect::new(a, b);
            tracing::info!(%rect, probe = ?probe, "rect");
            print_report(report::rect(rect, probe, tag))
        }
        Action::Batch { input, out } => run_batch(input, out, tag),
    }
}

fn print_report(report: Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_batch(input: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "batch");
    let summary = batch::run_batch(&input, &out)?;
    tracing::info!(rows = summary.rows, skipped = summary.skipped, "batch_done");

    let params = json!({
        "input": input.to_string_lossy(),
        "rows": summary.rows,
        "skipped": summary.skipped,
    });
    let sidecar = provenance::Sidecar::new(&out, params, tag).write(&out)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}
