/// Represents a type with floating point precision used by the whole crate.
pub type Float = f64;

/// Represents a distance in kilometers.
pub type Distance = Float;
