use std::{
    fmt::Display,
    ops::{Index, IndexMut, Not},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub const NUM_TILES: u8 = 9;

/// Every row, column and diagonal, as tile indices.
pub const WINNING_LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::O => write!(f, "O"),
            Player::X => write!(f, "X"),
        }
    }
}

// rank:
// 3: 6 7 8
// 2: 3 4 5
// 1: 0 1 2
//    A B C : file
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct TileId(u8);
impl TileId {
    pub const A1: TileId = TileId(0);
    pub const B1: TileId = TileId(1);
    pub const C1: TileId = TileId(2);
    pub const A2: TileId = TileId(3);
    pub const B2: TileId = TileId(4);
    pub const C2: TileId = TileId(5);
    pub const A3: TileId = TileId(6);
    pub const B3: TileId = TileId(7);
    pub const C3: TileId = TileId(8);

    pub const fn new(val: u8) -> Option<Self> {
        if val >= NUM_TILES {
            None
        } else {
            Some(Self(val))
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = TileId> {
        (0..NUM_TILES).map(TileId)
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.0 % 3) as char;
        write!(f, "{}{}", file, self.0 / 3 + 1)
    }
}

impl FromStr for TileId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a1" | "A1" => Ok(TileId::A1),
            "a2" | "A2" => Ok(TileId::A2),
            "a3" | "A3" => Ok(TileId::A3),
            "b1" | "B1" => Ok(TileId::B1),
            "b2" | "B2" => Ok(TileId::B2),
            "b3" | "B3" => Ok(TileId::B3),
            "c1" | "C1" => Ok(TileId::C1),
            "c2" | "C2" => Ok(TileId::C2),
            "c3" | "C3" => Ok(TileId::C3),
            _ => s.parse::<u8>().ok().and_then(TileId::new).ok_or(()),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Board {
    tiles: [Option<Player>; 9],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, tile: TileId, player: Player) {
        self[tile] = Some(player);
    }

    pub fn clear(&mut self, tile: TileId) {
        self[tile] = None;
    }

    pub fn reset(&mut self) {
        self.tiles = [None; 9];
    }

    pub fn mark_count(&self) -> u8 {
        self.tiles.iter().flatten().count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(Option::is_some)
    }

    /// Unmarked tiles in ascending index order.
    pub fn empty_tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        TileId::all().filter(|&tile| self[tile].is_none())
    }

    pub fn has_line(&self, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.tiles[i as usize] == Some(player)))
    }

    /// X is checked before O; a legal game never has both.
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.has_line(player))
    }
}

impl Index<TileId> for Board {
    type Output = Option<Player>;

    fn index(&self, tile: TileId) -> &Self::Output {
        &self.tiles[tile.0 as usize]
    }
}

impl IndexMut<TileId> for Board {
    fn index_mut(&mut self, index: TileId) -> &mut Self::Output {
        &mut self.tiles[index.0 as usize]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, rank) in self.tiles.chunks_exact(3).enumerate().rev() {
            write!(f, "{}│ ", i + 1)?;
            for tile in rank {
                match tile {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, "-")?,
                };
            }

            writeln!(f)?;
        }
        write!(f, " ╰─────\n   ABC")?;
        Ok(())
    }
}
