use crate::foundation::core::Point3;

/// Grid pitch between neighbouring stroke points.
pub const LETTER_SPACING: f32 = 0.11;
/// Number of z layers each stroke is replicated across.
pub const LETTER_DEPTH: usize = 2;

const LEFT: f32 = -0.25;
const TOP: f32 = 0.35;

/// The four letterforms, in cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Letter {
    /// Letter L.
    L,
    /// Letter U.
    U,
    /// Letter P.
    P,
    /// Letter O.
    O,
}

impl Letter {
    /// Fixed cycle order.
    pub const ORDER: [Letter; 4] = [Letter::L, Letter::U, Letter::P, Letter::O];

    /// Number of letters in the cycle.
    pub const COUNT: usize = Self::ORDER.len();

    /// Letter at cycle position `index`, wrapping.
    pub fn from_index(index: usize) -> Self {
        Self::ORDER[index % Self::COUNT]
    }

    /// Position of this letter in the cycle.
    pub fn index(self) -> usize {
        match self {
            Self::L => 0,
            Self::U => 1,
            Self::P => 2,
            Self::O => 3,
        }
    }

    /// The glyph this layout approximates.
    pub fn glyph(self) -> char {
        match self {
            Self::L => 'L',
            Self::U => 'U',
            Self::P => 'P',
            Self::O => 'O',
        }
    }

    /// Generate this letter's point layout.
    pub fn layout(self) -> Vec<Point3> {
        match self {
            Self::L => letter_l(),
            Self::U => letter_u(),
            Self::P => letter_p(),
            Self::O => letter_o(),
        }
    }
}

fn layer_z(layer: usize) -> f32 {
    (layer as f32 - 0.5) * LETTER_SPACING * 0.7
}

fn row_y(row: usize) -> f32 {
    TOP - row as f32 * LETTER_SPACING
}

fn col_x(col: usize) -> f32 {
    LEFT + col as f32 * LETTER_SPACING
}

/// Stem of 7 plus a foot of 4, per layer.
pub fn letter_l() -> Vec<Point3> {
    let mut out = Vec::with_capacity(11 * LETTER_DEPTH);
    for z in 0..LETTER_DEPTH {
        for y in 0..7 {
            out.push(Point3::new(LEFT, row_y(y), layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for x in 1..5 {
            out.push(Point3::new(col_x(x), row_y(6), layer_z(z)));
        }
    }
    out
}

/// Two uprights of 6 and a base of 3, per layer.
pub fn letter_u() -> Vec<Point3> {
    let mut out = Vec::with_capacity(15 * LETTER_DEPTH);
    for z in 0..LETTER_DEPTH {
        for y in 0..6 {
            out.push(Point3::new(LEFT, row_y(y), layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for y in 0..6 {
            out.push(Point3::new(0.15, row_y(y), layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for x in 1..4 {
            out.push(Point3::new(col_x(x), row_y(6), layer_z(z)));
        }
    }
    out
}

/// Stem of 7, bowl top of 3, bowl side of 2 and bowl bottom of 3, per layer.
pub fn letter_p() -> Vec<Point3> {
    let mut out = Vec::with_capacity(15 * LETTER_DEPTH);
    for z in 0..LETTER_DEPTH {
        for y in 0..7 {
            out.push(Point3::new(LEFT, row_y(y), layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for x in 1..4 {
            out.push(Point3::new(col_x(x), TOP, layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for y in 1..3 {
            out.push(Point3::new(0.08, row_y(y), layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for x in 1..4 {
            out.push(Point3::new(col_x(x), row_y(3), layer_z(z)));
        }
    }
    out
}

/// Inner uprights of 5 each plus full top and bottom bars of 5, per layer.
pub fn letter_o() -> Vec<Point3> {
    let mut out = Vec::with_capacity(20 * LETTER_DEPTH);
    for z in 0..LETTER_DEPTH {
        for y in 1..6 {
            out.push(Point3::new(LEFT, row_y(y), layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for y in 1..6 {
            out.push(Point3::new(0.15, row_y(y), layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for x in 0..5 {
            out.push(Point3::new(col_x(x), TOP, layer_z(z)));
        }
    }
    for z in 0..LETTER_DEPTH {
        for x in 0..5 {
            out.push(Point3::new(col_x(x), row_y(6), layer_z(z)));
        }
    }
    out
}

/// Point at `index` in `layout`, or the origin past its end.
pub fn letter_position(index: usize, layout: &[Point3]) -> Point3 {
    layout.get(index).copied().unwrap_or(Point3::ORIGIN)
}

/// All four layouts, generated once, plus the largest point count among them.
///
/// Every per-instance buffer is sized to [`LetterRegistry::max_count`] so switching letters
/// never changes the buffer layout.
#[derive(Clone, Debug)]
pub struct LetterRegistry {
    layouts: [Vec<Point3>; Letter::COUNT],
    max_count: usize,
}

impl LetterRegistry {
    /// Generate every layout.
    pub fn new() -> Self {
        let layouts = Letter::ORDER.map(Letter::layout);
        let max_count = layouts.iter().map(Vec::len).max().unwrap_or(0);
        Self { layouts, max_count }
    }

    /// Layout for `letter`.
    pub fn layout(&self, letter: Letter) -> &[Point3] {
        &self.layouts[letter.index()]
    }

    /// Layout for cycle position `index`, wrapping.
    pub fn layout_at(&self, index: usize) -> &[Point3] {
        self.layout(Letter::from_index(index))
    }

    /// Largest layout length; the per-instance point multiplier.
    pub fn max_count(&self) -> usize {
        self.max_count
    }
}

impl Default for LetterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/letters.rs"]
mod tests;
