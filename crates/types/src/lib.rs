//! Core types module - shared data structures and constants
//!
//! Pure data types with no external dependencies, usable from the engine core,
//! the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing
//!
//! The game is driven by a single fixed drop timer: every `DROP_INTERVAL_MS`
//! the active piece falls one row. There is no level progression.
//!
//! # Examples
//!
//! ```
//! use fruit_blocks_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.image_asset(), "eggplant.png");
//!
//! let cmd = Command::from_str("moveLeft").unwrap();
//! assert_eq!(cmd, Command::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Interval of the drop timer in milliseconds.
pub const DROP_INTERVAL_MS: u32 = 700;

/// Points for a single cleared line; a lock clearing `n` lines scores `n² × LINE_CLEAR_BASE`.
pub const LINE_CLEAR_BASE: u32 = 100;

/// Tetromino piece kinds, in spawn-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in spawn-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Compact non-zero cell code used in board snapshots (1..=7).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]; 0 and unknown codes map to `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::L),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Display color as a `#RRGGBB` string.
    pub fn color_hex(&self) -> &'static str {
        match self {
            PieceKind::I => "#00FFFF",
            PieceKind::O => "#FFFF00",
            PieceKind::T => "#800080",
            PieceKind::J => "#0000FF",
            PieceKind::L => "#FFA500",
            PieceKind::S => "#00FF00",
            PieceKind::Z => "#FF0000",
        }
    }

    /// Display color as an `(r, g, b)` triple. Matches [`PieceKind::color_hex`].
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xFF, 0xFF),
            PieceKind::O => (0xFF, 0xFF, 0x00),
            PieceKind::T => (0x80, 0x00, 0x80),
            PieceKind::J => (0x00, 0x00, 0xFF),
            PieceKind::L => (0xFF, 0xA5, 0x00),
            PieceKind::S => (0x00, 0xFF, 0x00),
            PieceKind::Z => (0xFF, 0x00, 0x00),
        }
    }

    /// Image asset drawn on the piece's cells by graphical front ends.
    pub fn image_asset(&self) -> &'static str {
        match self {
            PieceKind::I => "ketupat.png",
            PieceKind::O => "banana.png",
            PieceKind::T => "eggplant.png",
            PieceKind::J => "peach.png",
            PieceKind::L => "pineapple.png",
            PieceKind::S => "avocado.png",
            PieceKind::Z => "strawberry.png",
        }
    }
}

/// Commands accepted from the input collaborator.
///
/// The drop timer is not a command; it calls `tick()` on the engine directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Reset,
}

impl Command {
    /// Parse command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::Reset => "reset",
        }
    }
}

/// Lifecycle status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    GameOver,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Cell on the board (None = empty, Some = filled by piece kind)
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_code_roundtrip_covers_all_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PieceKind::from_code(0), None);
        assert_eq!(PieceKind::from_code(8), None);
    }

    #[test]
    fn color_hex_matches_rgb() {
        for kind in PieceKind::ALL {
            let (r, g, b) = kind.color_rgb();
            assert_eq!(kind.color_hex(), format!("#{:02X}{:02X}{:02X}", r, g, b));
        }
    }

    #[test]
    fn command_parse_is_case_insensitive() {
        assert_eq!(Command::from_str("MOVERIGHT"), Some(Command::MoveRight));
        assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
        assert_eq!(Command::from_str("hardDrop"), None);
        assert_eq!(
            Command::from_str(Command::Rotate.as_str()),
            Some(Command::Rotate)
        );
    }

    #[test]
    fn default_status_is_running() {
        assert!(GameStatus::default().is_running());
        assert!(!GameStatus::GameOver.is_running());
    }
}
