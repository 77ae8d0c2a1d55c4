use crate::types::Position;

/// Unit step along one of the eight compass rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

/// Scan order: top, then clockwise.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dx: 0, dy: -1 },
    Direction { dx: 1, dy: -1 },
    Direction { dx: 1, dy: 0 },
    Direction { dx: 1, dy: 1 },
    Direction { dx: 0, dy: 1 },
    Direction { dx: -1, dy: 1 },
    Direction { dx: -1, dy: 0 },
    Direction { dx: -1, dy: -1 },
];

impl Direction {
    /// Neighbour of `from` along this ray. The result may lie off the board.
    pub fn step(self, from: Position) -> Position {
        Position::new(from.x + self.dx, from.y + self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell_in_each_direction() {
        let from = Position::new(1, 2);
        let expected = [
            Position::new(1, 1), // top
            Position::new(2, 1), // top right
            Position::new(2, 2), // right
            Position::new(2, 3), // bottom right
            Position::new(1, 3), // bottom
            Position::new(0, 3), // bottom left
            Position::new(0, 2), // left
            Position::new(0, 1), // top left
        ];

        for (direction, want) in DIRECTIONS.iter().zip(expected) {
            assert_eq!(direction.step(from), want, "{direction:?}");
        }
    }

    #[test]
    fn directions_are_the_eight_distinct_unit_vectors() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            assert!((a.dx, a.dy) != (0, 0));
            assert!((-1..=1).contains(&a.dx) && (-1..=1).contains(&a.dy));
            for b in &DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn step_can_leave_the_board() {
        let corner = Position::new(0, 0);
        assert_eq!(DIRECTIONS[7].step(corner), Position::new(-1, -1));
    }
}
