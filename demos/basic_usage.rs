// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_vector::prelude::*;

fn main() -> Result<(), VectorError> {
    // Rejected operations are reported at debug level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Vector Example ===\n");

    let v = Vector::new([1, 2, 3])?;
    let w: Vector = "(4, 5, 6)".parse()?;

    println!("v = {}", v);
    println!("w = {}\n", w);

    // Arithmetic
    println!("v + w     = {}", v.add(&w)?);
    println!("w - v     = {}", w.subtract(&v)?);
    println!("v * 2.5   = {}", v.scale("2.5")?);
    println!("v · w     = {}", v.dot(&w)?);
    println!("|v|       = {}", v.magnitude()?);
    println!("v / |v|   = {}", v.normalized()?);

    // 3D geometry
    println!("\n=== Cross Product ===");
    println!("v × w                   = {}", v.cross(&w)?);
    println!("area of parallelogram   = {}", v.area_of_parallelogram(&w)?);
    println!("area of triangle        = {}", v.area_of_triangle(&w)?);

    // Angles
    println!("\n=== Angles ===");
    println!(
        "angle(v, w) = {:.6} rad = {:.4}°",
        v.angle_with(&w, AngleUnit::Radians)?,
        v.angle_with(&w, AngleUnit::Degrees)?
    );
    println!("v ⟂ w ? {}", v.is_orthogonal_to(&w)?);
    println!("v ∥ -2v ? {}", v.is_parallel_to(&v.scale(-2)?)?);

    // Projection
    println!("\n=== Projection onto w ===");
    let parallel = v.component_parallel_to(&w)?;
    let orthogonal = v.component_orthogonal_to(&w)?;
    println!("parallel   = {}", parallel);
    println!("orthogonal = {}", orthogonal);
    println!("sum        = {}", parallel.add(&orthogonal)?);

    // Failures are values, not panics
    println!("\n=== Rejected Operations ===");
    let zero = Vector::zero(3)?;
    for result in [
        zero.normalized().map(|u| u.to_string()),
        v.angle_with(&zero, AngleUnit::Radians).map(|a| a.to_string()),
        v.component_parallel_to(&zero).map(|p| p.to_string()),
        v.add(&Vector::new([1, 2])?).map(|s| s.to_string()),
        Vector::new(Vec::<f64>::new()).map(|e| e.to_string()),
    ] {
        if let Err(err) = result {
            println!("  error: {}", err);
        }
    }

    Ok(())
}
