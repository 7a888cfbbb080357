//! Tile catalog: the fixed set of single-character map symbols
//!
//! Symbols are grouped the way the consuming game reads them. Checkpoint and
//! teleporter groups are ordered; index `i` is the i-th objective, so checkpoint
//! `a` must be visited before `b` and teleporter `t` pairs with output `u`.

use std::fmt;

use crate::io::configuration::CHECKPOINT_GROUPS;

/// A single map cell symbol drawn from the catalog
///
/// Only catalog symbols can be constructed, so every grid cell always holds a
/// symbol the map code and the game understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(char);

/// Reserved empty cell
pub const EMPTY: Tile = Tile(' ');
/// Open ground: playable like empty, but never chosen by random placement
pub const OPEN: Tile = Tile('o');
/// Rock
pub const ROCK: Tile = Tile('r');
/// Second rock variant
pub const ROCK2: Tile = Tile('R');
/// Third rock variant (not counted in the map code header)
pub const ROCK3: Tile = Tile('q');
/// Pre-placed wall
pub const WALL: Tile = Tile('p');
/// Cell the player may not build on
pub const UNBUILDABLE: Tile = Tile('x');
/// Second unbuildable variant
pub const UNBUILDABLE2: Tile = Tile('X');
/// Start of the green path
pub const GREEN_START: Tile = Tile('s');
/// Start of the red path
pub const RED_START: Tile = Tile('S');
/// Finish
pub const FINISH: Tile = Tile('f');

/// Checkpoints in visiting order
pub const CHECKPOINTS: [Tile; CHECKPOINT_GROUPS] =
    [Tile('a'), Tile('b'), Tile('c'), Tile('d'), Tile('e')];
/// Teleporter inputs, indexed like their outputs
pub const TELE_INS: [Tile; CHECKPOINT_GROUPS] =
    [Tile('t'), Tile('m'), Tile('g'), Tile('i'), Tile('k')];
/// Teleporter outputs, indexed like their inputs
pub const TELE_OUTS: [Tile; CHECKPOINT_GROUPS] =
    [Tile('u'), Tile('n'), Tile('h'), Tile('j'), Tile('l')];

impl Tile {
    /// Look up a catalog symbol
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' | 'o' | 'r' | 'R' | 'q' | 'p' | 'x' | 'X' | 's' | 'S' | 'f' | 'a' | 'b' | 'c'
            | 'd' | 'e' | 't' | 'm' | 'g' | 'i' | 'k' | 'u' | 'n' | 'h' | 'j' | 'l' => {
                Some(Self(symbol))
            }
            _ => None,
        }
    }

    /// The character written into map codes
    pub const fn symbol(self) -> char {
        self.0
    }

    /// Whether this is the reserved empty symbol
    pub const fn is_empty(self) -> bool {
        self.0 == EMPTY.0
    }

    /// Whether this counts as a rock in the map code header
    pub const fn is_rock(self) -> bool {
        self.0 == ROCK.0 || self.0 == ROCK2.0
    }

    /// Checkpoint symbol for a group index
    pub fn checkpoint(index: usize) -> Option<Self> {
        CHECKPOINTS.get(index).copied()
    }

    /// Teleporter input symbol for a group index
    pub fn teleport_in(index: usize) -> Option<Self> {
        TELE_INS.get(index).copied()
    }

    /// Teleporter output symbol for a group index
    pub fn teleport_out(index: usize) -> Option<Self> {
        TELE_OUTS.get(index).copied()
    }

    /// Group index if this is a checkpoint
    pub fn checkpoint_index(self) -> Option<usize> {
        CHECKPOINTS.iter().position(|&tile| tile == self)
    }

    /// Group index if this is a teleporter input
    pub fn teleport_in_index(self) -> Option<usize> {
        TELE_INS.iter().position(|&tile| tile == self)
    }

    /// Two-character code used by the legacy board display
    pub const fn legacy_code(self) -> &'static str {
        match self.0 {
            'r' => "r ",
            'R' => "r2",
            'q' => "r3",
            'p' => "p ",
            'x' => "x ",
            'X' => "x2",
            's' => "s ",
            'S' => "s2",
            'f' => "f ",
            'a' => "c ",
            'b' => "c2",
            'c' => "c3",
            'd' => "c4",
            'e' => "c5",
            't' => "t ",
            'u' => "u ",
            'm' => "t2",
            'n' => "u2",
            'g' => "t3",
            'h' => "u3",
            'i' => "t4",
            'j' => "u4",
            'k' => "t5",
            'l' => "u5",
            // Empty and open ground share a display code
            _ => "o ",
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        EMPTY
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
