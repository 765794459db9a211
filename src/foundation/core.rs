/// A point in model space.
///
/// Generators produce these once; afterwards they are only read and interpolated.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point3 {
    /// The origin, also used as the fallback for indices past a layout's end.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Build a point from its coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rescale to length `radius`. The origin stays at the origin.
    pub fn with_length(self, radius: f32) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ORIGIN;
        }
        Self::new(
            self.x / len * radius,
            self.y / len * radius,
            self.z / len * radius,
        )
    }

    /// Translate along the y axis.
    pub fn offset_y(self, dy: f32) -> Self {
        Self::new(self.x, self.y + dy, self.z)
    }

    /// Component by index (0 = x, 1 = y, anything else = z).
    pub fn component(self, l: usize) -> f32 {
        match l {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Coordinates as an array, in attribute order.
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// Linear interpolation used by the letter blend and the scalar easers.
pub trait Lerp: Sized {
    /// Interpolate from `a` (t = 0) to `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Point3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: <f32 as Lerp>::lerp(&a.x, &b.x, t),
            y: <f32 as Lerp>::lerp(&a.y, &b.y, t),
            z: <f32 as Lerp>::lerp(&a.z, &b.z, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
