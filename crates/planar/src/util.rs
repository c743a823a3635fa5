use std::fmt;

/// Writes a coordinate the way shape renderings expect: integral values without
/// a fractional part, a single unsigned zero, infinities spelled out, and
/// exponent form (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
pub(crate) fn write_num(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v == f64::INFINITY {
        f.write_str("Infinity")
    } else if v == f64::NEG_INFINITY {
        f.write_str("-Infinity")
    } else if v == 0.0 {
        f.write_str("0")
    } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
        // LowerExp gives the shortest digits; only the exponent sign differs.
        let s = format!("{v:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&s),
        }
    } else {
        // f64's Display already drops a trailing ".0" and spells NaN as "NaN".
        write!(f, "{v}")
    }
}

/// Closed-interval membership, independent of endpoint order.
#[inline]
pub(crate) fn within(v: f64, a: f64, b: f64) -> bool {
    a.min(b) <= v && v <= a.max(b)
}

#[inline]
pub(crate) fn within_eps(v: f64, a: f64, b: f64, eps: f64) -> bool {
    a.min(b) - eps <= v && v <= a.max(b) + eps
}
