use crate::error::{Error, Result};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of the grid.
pub const SIZE: usize = 3;

/// Solved layout, blank in the bottom-right corner.
pub const GOAL: Board = Board {
    tiles: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
};

/// Direction the blank travels when sliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order. Changing it changes which of several equally ranked
    /// successors is popped first.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable 3x3 layout. `0` is the blank.
///
/// Two boards are the same state exactly when their tiles match. The derived
/// ordering compares row-major tile by tile, which the search frontier uses as
/// a tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[[u8; SIZE]; SIZE]", into = "[[u8; SIZE]; SIZE]")]
pub struct Board {
    tiles: [[u8; SIZE]; SIZE],
}

impl Board {
    /// Builds a board, rejecting anything that is not a permutation of 0-8.
    pub fn new(tiles: [[u8; SIZE]; SIZE]) -> Result<Self> {
        let mut seen = [false; SIZE * SIZE];

        for (row, cells) in tiles.iter().enumerate() {
            for (col, &tile) in cells.iter().enumerate() {
                let slot = seen
                    .get_mut(tile as usize)
                    .ok_or(Error::InvalidTile { tile, row, col })?;
                if *slot {
                    return Err(Error::DuplicateTile { tile });
                }
                *slot = true;
            }
        }

        let board = Self { tiles };
        board.blank_position()?;
        Ok(board)
    }

    pub fn tiles(&self) -> [[u8; SIZE]; SIZE] {
        self.tiles
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Row and column of the blank.
    pub fn blank_position(&self) -> Result<(usize, usize)> {
        for (row, cells) in self.tiles.iter().enumerate() {
            if let Some(col) = cells.iter().position(|&t| t == 0) {
                return Ok((row, col));
            }
        }
        Err(Error::MissingBlank)
    }

    /// Board after sliding the blank one step, or `None` at the edge.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (row, col) = self.blank_position().ok()?;
        self.slide(row, col, movement)
    }

    fn slide(&self, row: usize, col: usize, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();
        let new_row = row.checked_add_signed(dr).filter(|&r| r < SIZE)?;
        let new_col = col.checked_add_signed(dc).filter(|&c| c < SIZE)?;

        let mut tiles = self.tiles;
        tiles[row][col] = tiles[new_row][new_col];
        tiles[new_row][new_col] = 0;
        Some(Self { tiles })
    }

    /// Every board one slide away, in `Move::ALL` order. Corners yield two,
    /// edges three and the centre four.
    pub fn successors(&self) -> Result<Vec<Self>> {
        let (row, col) = self.blank_position()?;
        Ok(Move::ALL
            .iter()
            .filter_map(|&m| self.slide(row, col, m))
            .collect())
    }

    /// The single move turning `self` into `next`, if they are adjacent.
    pub fn move_to(&self, next: &Board) -> Option<Move> {
        let (row, col) = self.blank_position().ok()?;
        Move::ALL
            .into_iter()
            .find(|&m| self.slide(row, col, m).as_ref() == Some(next))
    }

    /// Number of non-blank tiles out of place relative to `GOAL`.
    pub fn misplaced_tiles(&self) -> u32 {
        self.tiles
            .iter()
            .flatten()
            .zip(GOAL.tiles.iter().flatten())
            .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
            .count() as u32
    }

    /// Random walk of `steps` slides away from the goal. Every result is
    /// solvable since it is reached by legal moves.
    pub fn scramble<R: Rng + ?Sized>(rng: &mut R, steps: usize) -> Self {
        let mut board = GOAL;
        let mut last_move: Option<Move> = None;

        for _ in 0..steps {
            let options: Vec<(Move, Board)> = Move::ALL
                .iter()
                .filter(|&&m| last_move.map_or(true, |last| m != last.opposite()))
                .filter_map(|&m| board.apply(m).map(|b| (m, b)))
                .collect();

            // Never empty: every cell has at least two neighbours.
            if let Some(&(m, next)) = options.choose(rng) {
                board = next;
                last_move = Some(m);
            }
        }

        board
    }
}

/// Heuristic used by both searches.
pub fn heuristic(board: &Board) -> u32 {
    board.misplaced_tiles()
}

impl TryFrom<[[u8; SIZE]; SIZE]> for Board {
    type Error = Error;

    fn try_from(tiles: [[u8; SIZE]; SIZE]) -> Result<Self> {
        Board::new(tiles)
    }
}

impl From<Board> for [[u8; SIZE]; SIZE] {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Accepts nine digits with optional whitespace, `,`, `/`, `|`, brackets
    /// or parentheses between them.
    fn from_str(s: &str) -> Result<Self> {
        let mut digits = Vec::with_capacity(SIZE * SIZE);
        for c in s.chars() {
            if let Some(d) = c.to_digit(10) {
                digits.push(d as u8);
            } else if !(c.is_whitespace() || ",/|[]()".contains(c)) {
                return Err(Error::InvalidCharacter {
                    character: c,
                    context: s.to_string(),
                });
            }
        }

        if digits.len() != SIZE * SIZE {
            return Err(Error::InvalidBoardLength {
                got: digits.len(),
                context: s.to_string(),
            });
        }

        let mut tiles = [[0u8; SIZE]; SIZE];
        for (i, d) in digits.into_iter().enumerate() {
            tiles[i / SIZE][i % SIZE] = d;
        }
        Board::new(tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for &val in row {
                if val == 0 {
                    write!(f, " _ ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_goal_is_valid() {
        assert_eq!(Board::new(GOAL.tiles()).unwrap(), GOAL);
        assert!(GOAL.is_goal());
        assert_eq!(GOAL.blank_position().unwrap(), (2, 2));
    }

    #[test]
    fn test_rejects_out_of_range_tile() {
        let err = Board::new([[1, 2, 3], [4, 9, 6], [7, 8, 0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidTile { tile: 9, row: 1, col: 1 }));
    }

    #[test]
    fn test_rejects_duplicate_tile() {
        let err = Board::new([[1, 2, 3], [4, 5, 6], [7, 8, 8]]).unwrap_err();
        assert!(matches!(err, Error::DuplicateTile { tile: 8 }));

        let err = Board::new([[1, 2, 3], [4, 0, 6], [7, 8, 0]]).unwrap_err();
        assert!(matches!(err, Error::DuplicateTile { tile: 0 }));
    }

    #[test]
    fn test_parse_formats() {
        let expected = Board::new([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        assert_eq!(board("123406758"), expected);
        assert_eq!(board("1 2 3 / 4 0 6 / 7 5 8"), expected);
        assert_eq!(board("[[1,2,3],[4,0,6],[7,5,8]]"), expected);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "12340675".parse::<Board>(),
            Err(Error::InvalidBoardLength { got: 8, .. })
        ));
        assert!(matches!(
            "12340675x".parse::<Board>(),
            Err(Error::InvalidCharacter { character: 'x', .. })
        ));
    }

    #[test]
    fn test_blank_position() {
        assert_eq!(board("123406758").blank_position().unwrap(), (1, 1));
        assert_eq!(board("023416758").blank_position().unwrap(), (0, 0));
    }

    #[test]
    fn test_successor_counts() {
        assert_eq!(board("023416758").successors().unwrap().len(), 2);
        assert_eq!(board("123046758").successors().unwrap().len(), 3);
        assert_eq!(board("123406758").successors().unwrap().len(), 4);
        assert_eq!(GOAL.successors().unwrap().len(), 2);
    }

    #[test]
    fn test_successor_order_is_up_down_left_right() {
        let start = board("123406758");
        let next = start.successors().unwrap();
        assert_eq!(
            next,
            vec![
                board("103426758"),
                board("123456708"),
                board("123046758"),
                board("123460758"),
            ]
        );
    }

    #[test]
    fn test_successors_differ_by_one_swap() {
        let start = board("724506831");
        for next in start.successors().unwrap() {
            let differing = start
                .tiles()
                .iter()
                .flatten()
                .zip(next.tiles().iter().flatten())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2);
            assert!(start.move_to(&next).is_some());
        }
    }

    #[test]
    fn test_apply_at_edge() {
        assert_eq!(GOAL.apply(Move::Down), None);
        assert_eq!(GOAL.apply(Move::Right), None);
        assert_eq!(GOAL.apply(Move::Left), Some(board("123456708")));
    }

    #[test]
    fn test_move_to() {
        let start = board("123406758");
        let next = start.apply(Move::Down).unwrap();
        assert_eq!(start.move_to(&next), Some(Move::Down));
        assert_eq!(next.move_to(&start), Some(Move::Up));
        assert_eq!(start.move_to(&start), None);
        assert_eq!(start.move_to(&GOAL), None);
    }

    #[test]
    fn test_misplaced_tiles() {
        assert_eq!(GOAL.misplaced_tiles(), 0);
        assert_eq!(board("123406758").misplaced_tiles(), 2);
        assert_eq!(board("724506831").misplaced_tiles(), 6);
        assert_eq!(heuristic(&board("123456708")), 1);
    }

    #[test]
    fn test_zero_heuristic_only_at_goal() {
        for next in GOAL.successors().unwrap() {
            assert!(heuristic(&next) > 0);
        }
    }

    #[test]
    fn test_scramble_is_seeded() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(Board::scramble(&mut a, 30), Board::scramble(&mut b, 30));
        assert_eq!(Board::scramble(&mut a, 0), GOAL);
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(board("012345678") < board("102345678"));
        assert!(board("123456708") < GOAL);
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&GOAL).unwrap();
        assert_eq!(json, "[[1,2,3],[4,5,6],[7,8,0]]");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), GOAL);
        assert!(serde_json::from_str::<Board>("[[1,1,3],[4,5,6],[7,8,0]]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(GOAL.to_string(), " 1  2  3 \n 4  5  6 \n 7  8  _ \n");
    }
}
