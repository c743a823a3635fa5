//! JSON reports for single shapes.
//!
//! Non-finite numbers are not representable in JSON; they are emitted as the
//! strings `"NaN"`, `"Infinity"` and `"-Infinity"` so a sentinel answer is
//! still visible to the reader.

use planar::api::{Circle, Point, Rect, Segment};
use serde::Serialize;
use serde_json::{json, Value};

/// JSON number, or a string for NaN/±inf.
pub fn num(v: f64) -> Value {
    if v.is_finite() {
        json!(v)
    } else if v.is_nan() {
        json!("NaN")
    } else if v > 0.0 {
        json!("Infinity")
    } else {
        json!("-Infinity")
    }
}

fn pair(p: Point) -> Value {
    json!([num(p.x()), num(p.y())])
}

#[derive(Serialize)]
pub struct Report {
    pub shape: &'static str,
    pub display: String,
    pub tag: Option<String>,
    pub queries: Value,
}

pub fn point(p: Point, tag: Option<String>) -> Report {
    Report {
        shape: "point",
        display: p.to_string(),
        tag,
        queries: json!({ "coords": pair(p) }),
    }
}

/// Optional inputs for a segment report.
#[derive(Default)]
pub struct LineProbe {
    pub at_x: Option<f64>,
    pub at_y: Option<f64>,
    pub point: Option<Point>,
    pub eps: f64,
}

pub fn line(l: Segment, probe: &LineProbe, tag: Option<String>) -> Report {
    let [h1, h2] = l.split();
    let mut q = json!({
        "length": num(l.length()),
        "slope": num(l.slope()),
        "midpoint": pair(l.midpoint()),
        "split": [h1.to_string(), h2.to_string()],
    });
    if let Some(x) = probe.at_x {
        q["find_y"] = num(l.find_y(x));
    }
    if let Some(y) = probe.at_y {
        q["find_x"] = num(l.find_x(y));
    }
    if let Some(p) = probe.point {
        q["has_point"] = json!(l.has_point(&p));
        q["has_point_eps"] = json!(l.has_point_eps(&p, probe.eps));
    }
    Report {
        shape: "line",
        display: l.to_string(),
        tag,
        queries: q,
    }
}

pub fn circle(c: Circle, probe: Option<Point>, tag: Option<String>) -> Report {
    let mut q = json!({
        "area": num(c.area()),
        "perimeter": num(c.perimeter()),
    });
    if let Some(p) = probe {
        q["has_point"] = json!(c.has_point(&p));
    }
    Report {
        shape: "circle",
        display: c.to_string(),
        tag,
        queries: q,
    }
}

pub fn rect(r: Rect, probe: Option<Point>, tag: Option<String>) -> Report {
    let mut q = json!({
        "width": num(r.width()),
        "length": num(r.length()),
        "area": num(r.area()),
        "perimeter": num(r.perimeter()),
    });
    if let Some(p) = probe {
        q["has_point"] = json!(r.has_point(&p));
    }
    Report {
        shape: "rectangle",
        display: r.to_string(),
        tag,
        queries: q,
    }
}
