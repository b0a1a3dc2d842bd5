use std::ops::Not;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// One of the two players. `!side` gives the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal sign of travel toward this side (-1 = left, +1 = right)
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

impl Not for Side {
    type Output = Side;
    fn not(self) -> Self::Output {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl Distribution<Side> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        if rng.gen() {
            Side::Left
        } else {
            Side::Right
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_inversion() {
        assert_eq!(!Side::Left, Side::Right);
        assert_eq!(!Side::Right, Side::Left);
    }

    #[test]
    fn test_side_direction_signs() {
        assert_eq!(Side::Left.direction(), -1.0);
        assert_eq!(Side::Right.direction(), 1.0);
    }
}
