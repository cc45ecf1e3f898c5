use std::fmt;
use std::str::FromStr;

use tessel_geom::Vec3;

/// One of the six axis directions of a voxel.
///
/// Declaration order matters: it is the texture-slot order of block types and
/// the tie-break order of the voxel ray intersector.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

const DELTAS: [(i32, i32, i32); 6] = [
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
    (-1, 0, 0),
    (1, 0, 0),
];

const NAMES: [&str; 6] = ["down", "up", "north", "south", "west", "east"];

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index `[0..6)` back into a `Direction`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Direction> {
        Self::ALL.get(i).copied()
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        DELTAS[self.index()]
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (x, y, z) = self.delta();
        Vec3::new(x as f32, y as f32, z as f32)
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Face name as used in model descriptions.
    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Down | Direction::Up)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown face name `{}`", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .position(|n| *n == s)
            .and_then(Direction::from_index)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normals_are_unit_and_opposites_cancel() {
        for d in Direction::ALL {
            assert!((d.normal().length() - 1.0).abs() < 1e-6);
            let n = d.normal() + d.opposite().normal();
            assert_eq!(n, Vec3::ZERO);
            assert_eq!(d.opposite().opposite(), d);
        }
        assert_eq!(Direction::Down.normal(), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(Direction::North.delta(), (0, 0, -1));
        assert_eq!(Direction::East.delta(), (1, 0, 0));
    }

    #[test]
    fn names_roundtrip() {
        for d in Direction::ALL {
            assert_eq!(d.name().parse::<Direction>(), Ok(d));
            assert_eq!(Direction::from_index(d.index()), Some(d));
        }
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::from_index(6), None);
    }
}
