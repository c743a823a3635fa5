//! Command-line coordinate parsing (`"x,y"`).

use anyhow::{bail, Context, Result};
use planar::Point;

/// Parse `"x,y"` (whitespace around either number is ignored).
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((xs, ys)) = s.split_once(',') else {
        bail!("expected a coordinate pair `x,y`, got `{s}`");
    };
    let x: f64 = xs
        .trim()
        .parse()
        .with_context(|| format!("parsing x of `{s}`"))?;
    let y: f64 = ys
        .trim()
        .parse()
        .with_context(|| format!("parsing y of `{s}`"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        assert_eq!(parse_point("1,2").unwrap(), Point::new(1.0, 2.0));
        assert_eq!(parse_point(" -3.5 , 0.25").unwrap(), Point::new(-3.5, 0.25));
        assert_eq!(parse_point("inf,0").unwrap().x(), f64::INFINITY);
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_point("1").is_err());
        assert!(parse_point("1,").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("1,2,3").is_err());
    }
}
