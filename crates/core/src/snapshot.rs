use crate::engine::ActivePiece;
use crate::pieces::PieceShape;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute board coordinates of the piece's occupied cells, including rows above the top.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Piece codes per cell, 0 = empty (see `PieceKind::code`).
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// FNV-1a 64 of `board`, row-major.
    pub board_hash: u64,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    /// Lines cleared this game.
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.board_hash = fnv1a64_board(&self.board);
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::Running;
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            board_hash: 0,
            active: None,
            score: 0,
            lines: 0,
            status: GameStatus::Running,
        };
        s.clear();
        s
    }
}

pub fn fnv1a64_board(board: &[[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    let mut h = OFFSET_BASIS;
    for &b in board.iter().flatten() {
        h ^= b as u64;
        h = h.wrapping_mul(PRIME);
    }
    h
}
