//! Radially symmetric nested circles

use crate::{ArtError, Palette, Pen};

/// Most circles a composition accepts for one mandala
pub const MAX_MANDALA_CIRCLES: usize = 100_000;

/// Mandala parameters: the arm palette and the number of arms
#[derive(Clone, Debug, PartialEq)]
pub struct Mandala {
    palette: Palette,
    symmetry: u32,
}

impl Mandala {
    /// Create a mandala with `symmetry` arms colored from `palette`
    pub fn new(palette: Palette, symmetry: u32) -> Result<Self, ArtError> {
        if symmetry == 0 {
            return Err(ArtError::ZeroSymmetry);
        }
        Ok(Self { palette, symmetry })
    }

    /// Arm colors
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of arms
    pub fn symmetry(&self) -> u32 {
        self.symmetry
    }

    /// Rotation between arms in degrees (360 / symmetry)
    pub fn angle(&self) -> f32 {
        360.0 / self.symmetry as f32
    }

    /// Draw the mandala at the pen's current position and heading
    ///
    /// For each arm `i`: color `palette[i]`, a circle of `radius`, a nested
    /// mandala of `radius / 2` and `depth - 1`, then a clockwise turn of
    /// [`angle`](Self::angle). Zero depth draws nothing.
    pub fn draw<P: Pen + ?Sized>(&self, pen: &mut P, radius: f32, depth: u32) {
        if depth == 0 {
            return;
        }
        let angle = self.angle();
        for i in 0..self.symmetry as usize {
            pen.set_color(self.palette.get(i));
            pen.circle(radius);
            self.draw(pen, radius / 2.0, depth - 1);
            pen.right(angle);
        }
    }
}

impl Default for Mandala {
    fn default() -> Self {
        Self {
            palette: Palette::rainbow(),
            symmetry: 6,
        }
    }
}

/// Number of circles [`Mandala::draw`] makes: symmetry + symmetry² + ... + symmetry^depth
pub fn mandala_circle_count(symmetry: u32, depth: u32) -> usize {
    (1..=depth).map(|d| (symmetry as usize).pow(d)).sum()
}

/// Like [`mandala_circle_count`], but `None` once the count passes `limit`
pub fn mandala_circle_count_within(symmetry: u32, depth: u32, limit: usize) -> Option<usize> {
    let mut total: usize = 0;
    let mut level: usize = 1;
    for _ in 0..depth {
        level = level.checked_mul(symmetry as usize)?;
        total = total.checked_add(level)?;
        if total > limit {
            return None;
        }
    }
    Some(total)
}
