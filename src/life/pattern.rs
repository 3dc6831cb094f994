use crate::life::LifeGrid;

/// A named seed shape, stored as `(dx, dy)` offsets from its anchor.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Mark every cell of the pattern alive, offset from `anchor`.
    ///
    /// # Panics
    ///
    /// Panics if any cell lands outside the grid.
    pub fn apply(&self, grid: &mut LifeGrid, anchor: (usize, usize)) {
        let (x, y) = anchor;
        for &(dx, dy) in self.cells {
            grid.set_alive(x + dx, y + dy);
        }
    }
}

// Still lifes

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BEEHIVE: Pattern = Pattern {
    name: "beehive",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
};

pub const BOAT: Pattern = Pattern {
    name: "boat",
    cells: &[(0, 0), (1, 0), (0, 1), (2, 1), (1, 2)],
};

pub const SHIP: Pattern = Pattern {
    name: "ship",
    cells: &[(1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2)],
};

pub const POND: Pattern = Pattern {
    name: "pond",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (0, 2), (3, 2), (1, 3), (2, 3)],
};

// Oscillators

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (1, 3)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

// Spaceships

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

// Grows into a pentadecathlon

pub const LINE_10: Pattern = Pattern {
    name: "line-10",
    cells: &[
        (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
        (5, 0), (6, 0), (7, 0), (8, 0), (9, 0),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    BLOCK, BEEHIVE, BOAT, SHIP, POND, BLINKER, TOAD, BEACON, GLIDER, LINE_10,
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name == name)
}
