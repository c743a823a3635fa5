//! Walk a segment by repeated halving and print what each piece reports.
//!
//! Shows the sentinel conventions: interpolation off a piece is `NaN`, and a
//! probe only belongs to the pieces that actually cover it.

use planar::prelude::*;

fn main() {
    let line = Line::new((-4.0, -4.0), (8.0, 8.0));
    let probe = Point::new(5.0, 5.0);
    let mut pieces = vec![line];
    for depth in 0..3 {
        println!("depth={depth} pieces={}", pieces.len());
        for piece in &pieces {
            println!(
                "  {piece} length={:.3} slope={} find_y(5)={} has_probe={}",
                piece.length(),
                piece.slope(),
                piece.find_y(5.0),
                piece.has_point(&probe)
            );
        }
        pieces = pieces.iter().flat_map(|p| p.split()).collect();
    }
}
