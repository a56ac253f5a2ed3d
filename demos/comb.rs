//! Fits both spline flavors through a small knot polyline and prints the
//! per-segment data a renderer would consume: arc lengths, and a
//! curvature "comb" (position + normal scaled by signed curvature) along
//! each segment.
//!
//! ```text
//! cargo run --example comb
//! ```

use splinefit::fit::{segments, FitHobbySpline, FitNaturalCubicSpline};
use splinefit::math::Point3;
use splinefit::Result;

const COMB_TEETH: u32 = 8;

fn main() -> Result<()> {
    let knots = vec![
        Point3::new(60.0, 120.0, 0.0),
        Point3::new(220.0, 40.0, 0.0),
        Point3::new(420.0, 160.0, 0.0),
        Point3::new(700.0, 80.0, 0.0),
    ];

    for omega in [0.0, 0.5, 1.0] {
        let spline = FitHobbySpline::new(knots.clone(), omega).execute()?;
        println!("hobby fit, omega {omega}:");
        print_comb(&spline)?;
    }

    let spline = FitNaturalCubicSpline::new(knots).execute()?;
    println!("natural cubic fit:");
    print_comb(&spline)?;

    Ok(())
}

fn print_comb(spline: &[Point3]) -> Result<()> {
    for (i, curve) in segments(spline)?.iter().enumerate() {
        println!("  segment {i}: length {:.3}", curve.length());
        for tooth in 0..=COMB_TEETH {
            let t = f64::from(tooth) / f64::from(COMB_TEETH);
            let p = curve.evaluate(t);
            let n = curve.normal(t)?;
            let k = curve.curvature(t).k;
            // A renderer would stroke from p to the tooth tip.
            let tip = p - n * (k * 1500.0);
            println!(
                "    t {t:.3}  p ({:8.3}, {:8.3})  k {k:10.6}  tip ({:8.3}, {:8.3})",
                p.x, p.y, tip.x, tip.y
            );
        }
    }
    Ok(())
}
