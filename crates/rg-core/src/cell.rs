//! Integer grid coordinates and the rectangular play area.
//!
//! The grid lies in the horizontal `(x, z)` plane of the renderer's world;
//! `y` is "up" and never appears in core logic.  All arithmetic is exact
//! integer arithmetic.

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One grid cell.  Equality and hashing are exact-integer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// `|Δx| + |Δz|`, the admissible A* heuristic for 4-connected moves.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.z.abs_diff(other.z)
    }

    /// The adjacent cell one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dz) = dir.delta();
        Cell::new(self.x + dx, self.z + dz)
    }

    /// The four axis-aligned neighbours in the fixed expansion order
    /// `+x, -x, +z, -z`.
    #[inline]
    pub fn neighbors(self) -> [Cell; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Direction of a single orthogonal step from `self` to `to`, or `None`
    /// if the two cells are not 4-adjacent.
    pub fn direction_to(self, to: Cell) -> Option<Direction> {
        match (to.x - self.x, to.z - self.z) {
            (1, 0) => Some(Direction::PosX),
            (-1, 0) => Some(Direction::NegX),
            (0, 1) => Some(Direction::PosZ),
            (0, -1) => Some(Direction::NegZ),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, z): (i32, i32)) -> Self {
        Cell::new(x, z)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four orthogonal moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    PosX,
    NegX,
    PosZ,
    NegZ,
}

impl Direction {
    /// Expansion order shared by the path finder and neighbour enumeration.
    pub const ALL: [Direction; 4] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosZ,
        Direction::NegZ,
    ];

    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::PosX => (1, 0),
            Direction::NegX => (-1, 0),
            Direction::PosZ => (0, 1),
            Direction::NegZ => (0, -1),
        }
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Inclusive rectangular play area.
///
/// The default matches the layout the engine was tuned for:
/// x ∈ [-2, 42], z ∈ [-2, 17].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(min_x: i32, max_x: i32, min_z: i32, max_z: i32) -> Self {
        Self { min_x, max_x, min_z, max_z }
    }

    /// `true` if `cell` lies inside the rectangle (edges included).
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x
            && cell.x <= self.max_x
            && cell.z >= self.min_z
            && cell.z <= self.max_z
    }

    /// `true` if the rectangle has at least one cell.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_z <= self.max_z
    }

    pub fn width(&self) -> u32 {
        self.max_x.abs_diff(self.min_x) + 1
    }

    pub fn depth(&self) -> u32 {
        self.max_z.abs_diff(self.min_z) + 1
    }

    /// Row-major iterator over every cell, `z` outer, `x` inner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min_z..=self.max_z)
            .flat_map(move |z| (self.min_x..=self.max_x).map(move |x| Cell::new(x, z)))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(-2, 42, -2, 17)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x∈[{}, {}] z∈[{}, {}]",
            self.min_x, self.max_x, self.min_z, self.max_z
        )
    }
}
