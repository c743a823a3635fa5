//! CSV batch mode: one segment per row (`xa,ya,xb,yb`).
//!
//! Appends `length`, `slope`, `mid_x`, `mid_y`. Rows with a missing coordinate
//! get nulls in every derived column.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use planar::api::Segment;
use polars::prelude::*;

pub const INPUT_COLUMNS: [&str; 4] = ["xa", "ya", "xb", "yb"];

/// Summary of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub skipped: usize,
}

pub fn run_batch(input: &Path, out: &Path) -> Result<BatchSummary> {
    let mut df = LazyCsvReader::new(input)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;

    let summary = derive_columns(&mut df)?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(summary)
}

/// Compute the derived columns in place.
pub fn derive_columns(df: &mut DataFrame) -> Result<BatchSummary> {
    let xa = f64_column(df, "xa")?;
    let ya = f64_column(df, "ya")?;
    let xb = f64_column(df, "xb")?;
    let yb = f64_column(df, "yb")?;

    let rows = df.height();
    let mut length = Vec::with_capacity(rows);
    let mut slope = Vec::with_capacity(rows);
    let mut mid_x = Vec::with_capacity(rows);
    let mut mid_y = Vec::with_capacity(rows);
    let mut skipped = 0usize;
    for i in 0..rows {
        match (xa[i], ya[i], xb[i], yb[i]) {
            (Some(xa), Some(ya), Some(xb), Some(yb)) => {
                let l = Segment::new((xa, ya), (xb, yb));
                let mid = l.midpoint();
                length.push(Some(l.length()));
                slope.push(Some(l.slope()));
                mid_x.push(Some(mid.x()));
                mid_y.push(Some(mid.y()));
            }
            _ => {
                skipped += 1;
                length.push(None);
                slope.push(None);
                mid_x.push(None);
                mid_y.push(None);
            }
        }
    }

    for (name, values) in [
        ("length", length),
        ("slope", slope),
        ("mid_x", mid_x),
        ("mid_y", mid_y),
    ] {
        df.with_column(Series::new(name.into(), values))?;
    }
    Ok(BatchSummary { rows, skipped })
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}` (expected {INPUT_COLUMNS:?})"))?;
    let col = col.cast(&DataType::Float64)?;
    Ok(col.f64()?.into_iter().collect())
}
