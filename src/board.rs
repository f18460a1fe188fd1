use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Direction a tile slides into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Fixed expansion order used by [`Board::neighbors`].
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Offset applied to the blank's `(row, col)` when a tile slides this way.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Down => (-1, 0),
            Move::Left => (0, 1),
            Move::Right => (0, -1),
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

/// Boards reachable with a single slide. The blank has at most four sides.
pub type Neighbors = SmallVec<[Board; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimension must be at least 2, got {0}")]
    DimensionTooSmall(usize),
    #[error("a {dimension}x{dimension} board needs {expected} tiles, got {actual}")]
    WrongTileCount {
        dimension: usize,
        expected: usize,
        actual: usize,
    },
    #[error("row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("tile {tile} is outside the range 0..={max}")]
    TileOutOfRange { tile: u32, max: u32 },
    #[error("tile {0} appears more than once")]
    DuplicateTile(u32),
}

/// An immutable n-by-n arrangement of tiles, stored row-major with `0` as the blank.
///
/// In the goal arrangement tile `k` sits at index `k - 1` and the blank sits
/// at the last index. Every transformation returns a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Builds a board from `size * size` row-major tiles.
    ///
    /// Fails unless the tiles are a permutation of `0..size * size`.
    pub fn new(size: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::DimensionTooSmall(size));
        }

        let expected = size * size;
        if tiles.len() != expected {
            return Err(BoardError::WrongTileCount {
                dimension: size,
                expected,
                actual: tiles.len(),
            });
        }

        let max = (expected - 1) as u32;
        let mut seen = vec![false; expected];
        let mut blank = 0;
        for (index, &tile) in tiles.iter().enumerate() {
            if tile > max {
                return Err(BoardError::TileOutOfRange { tile, max });
            }
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(BoardError::DuplicateTile(tile));
            }
            if tile == 0 {
                blank = index;
            }
        }

        Ok(Self { size, tiles, blank })
    }

    /// Builds a board from a grid where `rows[i][j]` is the tile in row `i`, column `j`.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, BoardError> {
        let size = rows.len();
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != size {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: size,
                    actual: tiles.len(),
                });
            }
        }

        Self::new(size, rows.concat())
    }

    /// The solved board of the given dimension.
    pub fn goal(size: usize) -> Result<Self, BoardError> {
        let last = (size * size) as u32;
        Self::new(size, (1..last).chain(std::iter::once(0)).collect())
    }

    /// A uniformly random arrangement. Half of these are unsolvable.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut tiles: Vec<u32> = (0..(size * size) as u32).collect();
        tiles.shuffle(rng);
        Self::new(size, tiles)
    }

    /// A random walk of `steps` slides away from the goal, never undoing the previous slide.
    pub fn scrambled<R: Rng + ?Sized>(
        size: usize,
        steps: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut board = Self::goal(size)?;
        let mut previous: Option<Board> = None;

        for _ in 0..steps {
            let candidates: Neighbors = board
                .neighbors()
                .into_iter()
                .filter(|next| previous.as_ref() != Some(next))
                .collect();
            let Some(next) = candidates.choose(rng).cloned() else {
                break;
            };
            previous = Some(std::mem::replace(&mut board, next));
        }

        Ok(board)
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Number of tiles, blank excluded, that are out of place.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != 0 && tile as usize != index + 1)
            .count()
    }

    /// Sum over all tiles, blank excluded, of the grid distance to the goal cell.
    pub fn manhattan(&self) -> usize {
        let mut distance = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.tiles[row * self.size + col];
                if value != 0 {
                    let target = value as usize - 1;
                    distance += row.abs_diff(target / self.size);
                    distance += col.abs_diff(target % self.size);
                }
            }
        }
        distance
    }

    /// Tiles that have to leave their goal row or column so that the tiles
    /// remaining in it are in goal order.
    ///
    /// Each such tile costs at least two slides beyond its Manhattan distance,
    /// which keeps `manhattan() + 2 * linear_conflicts()` admissible.
    pub fn linear_conflicts(&self) -> usize {
        let mut conflicts = 0;
        let mut line = Vec::with_capacity(self.size);

        // Row conflicts
        for row in 0..self.size {
            line.clear();
            for col in 0..self.size {
                let value = self.tiles[row * self.size + col];
                if value != 0 && (value as usize - 1) / self.size == row {
                    line.push(value);
                }
            }
            conflicts += line.len() - longest_increasing_run(&line);
        }

        // Column conflicts
        for col in 0..self.size {
            line.clear();
            for row in 0..self.size {
                let value = self.tiles[row * self.size + col];
                if value != 0 && (value as usize - 1) % self.size == col {
                    line.push(value);
                }
            }
            conflicts += line.len() - longest_increasing_run(&line);
        }

        conflicts
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[..last]
            .iter()
            .enumerate()
            .all(|(index, &tile)| tile as usize == index + 1)
            && self.tiles[last] == 0
    }

    /// Parity test: whether the goal is reachable from this board.
    ///
    /// Odd widths need an even inversion count. Even widths need
    /// `inversions + blank row` to be odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank / self.size) % 2 == 1
        }
    }

    fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// The board with the first two non-blank tiles (row-major) exchanged.
    ///
    /// The swap flips solvability. The blank stays put, so the same two cells
    /// are picked again and `twin().twin()` is the original board.
    pub fn twin(&self) -> Board {
        let first = if self.blank == 0 { 1 } else { 0 };
        let mut second = first + 1;
        if second == self.blank {
            second += 1;
        }
        self.swapped(first, second)
    }

    /// The board after sliding a tile in direction `movement`, if the blank has a tile on that side.
    pub fn slide(&self, movement: Move) -> Option<Board> {
        let (dx, dy) = movement.as_offset();
        let (row, col) = self.blank();

        let new_x = row as isize + dx;
        let new_y = col as isize + dy;
        let size = self.size as isize;

        if new_x >= 0 && new_x < size && new_y >= 0 && new_y < size {
            let target = new_x as usize * self.size + new_y as usize;
            Some(self.swapped(self.blank, target))
        } else {
            None
        }
    }

    /// All boards one slide away, in [`Move::ALL`] order.
    pub fn neighbors(&self) -> Neighbors {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.slide(movement))
            .collect()
    }

    /// The slide that turns this board into `next`, if they are one slide apart.
    pub fn move_to(&self, next: &Board) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|&movement| self.slide(movement).as_ref() == Some(next))
    }

    fn swapped(&self, i: usize, k: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(i, k);
        let blank = if self.blank == i {
            k
        } else if self.blank == k {
            i
        } else {
            self.blank
        };
        Board {
            size: self.size,
            tiles,
            blank,
        }
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                write!(f, "{:3}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn longest_increasing_run(line: &[u32]) -> usize {
    let mut tails: Vec<u32> = Vec::with_capacity(line.len());
    for &value in line {
        match tails.binary_search(&value) {
            Ok(_) => {}
            Err(pos) if pos == tails.len() => tails.push(value),
            Err(pos) => tails[pos] = value,
        }
    }
    tails.len()
}
