use crate::life::pattern::{self, Pattern};
use crate::life::{GridError, LifeGrid};

/// Seed for [`Scenario::RandomFill`].
pub const RANDOM_SEED: u64 = 20171114;
/// Share of cells alive after a random fill.
pub const RANDOM_DENSITY: f32 = 0.2;

/// The hardcoded boards the binary can start from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Scenario {
    /// 50x40: every still life and oscillator in the pattern table.
    StillLifesAndOscillators,
    /// 80x80 filled at [`RANDOM_DENSITY`] from [`RANDOM_SEED`].
    RandomFill,
    /// 40x40 with a single glider.
    Glider,
    /// 20x20 with a ten cell line.
    #[default]
    Line,
}

impl Scenario {
    pub fn all() -> [Scenario; 4] {
        [
            Scenario::StillLifesAndOscillators,
            Scenario::RandomFill,
            Scenario::Glider,
            Scenario::Line,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::StillLifesAndOscillators => "still lifes and oscillators",
            Scenario::RandomFill => "random fill",
            Scenario::Glider => "glider",
            Scenario::Line => "line",
        }
    }

    /// `(width, height)` of the board.
    pub fn size(&self) -> (usize, usize) {
        match self {
            Scenario::StillLifesAndOscillators => (50, 40),
            Scenario::RandomFill => (80, 80),
            Scenario::Glider => (40, 40),
            Scenario::Line => (20, 20),
        }
    }

    /// Patterns and the anchors they are stamped at.
    pub fn placements(&self) -> &'static [(&'static Pattern, (usize, usize))] {
        match self {
            Scenario::StillLifesAndOscillators => &[
                (&pattern::BLOCK, (2, 2)),
                (&pattern::BEEHIVE, (10, 2)),
                (&pattern::BOAT, (20, 2)),
                (&pattern::SHIP, (30, 2)),
                (&pattern::POND, (40, 2)),
                (&pattern::BLINKER, (2, 10)),
                (&pattern::TOAD, (10, 10)),
                (&pattern::BEACON, (20, 10)),
            ],
            Scenario::RandomFill => &[],
            Scenario::Glider => &[(&pattern::GLIDER, (5, 5))],
            Scenario::Line => &[(&pattern::LINE_10, (5, 5))],
        }
    }

    pub fn build(&self) -> Result<LifeGrid, GridError> {
        let (width, height) = self.size();
        let mut grid = match self {
            Scenario::RandomFill => LifeGrid::new_random(width, height, RANDOM_SEED, RANDOM_DENSITY)?,
            _ => LifeGrid::new(width, height)?,
        };
        for (pattern, anchor) in self.placements() {
            pattern.apply(&mut grid, *anchor);
        }
        Ok(grid)
    }
}
