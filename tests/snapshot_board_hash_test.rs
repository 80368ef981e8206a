use fruit_blocks::core::{fnv1a64_board, FixedPieces, GameEngine, GameSnapshot};
use fruit_blocks::types::{Command, PieceKind};

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn reference_hash(board: &[[u8; 10]; 20]) -> u64 {
    fnv1a64_bytes(board.iter().flat_map(|row| row.iter().copied()))
}

#[test]
fn snapshot_into_sets_board_hash() {
    let mut engine = GameEngine::with_source(FixedPieces::repeat(PieceKind::J));
    engine.start();

    let mut snap = GameSnapshot::default();
    engine.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, reference_hash(&snap.board));
    let empty_hash = snap.board_hash;

    // Drop the first J onto the floor.
    loop {
        let before = engine.active().unwrap();
        engine.apply(Command::SoftDrop);
        if engine.active().map(|p| p.y) != Some(before.y + 1) {
            break;
        }
    }

    engine.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, reference_hash(&snap.board));
    assert_ne!(snap.board_hash, empty_hash);
}

#[test]
fn board_hash_ignores_active_piece() {
    let mut engine = GameEngine::with_source(FixedPieces::repeat(PieceKind::T));
    engine.start();
    let before = engine.snapshot();

    engine.apply(Command::MoveLeft);
    engine.apply(Command::Rotate);
    let after = engine.snapshot();

    assert_ne!(before.active, after.active);
    assert_eq!(before.board_hash, after.board_hash);
}

#[test]
fn exported_hash_matches_reference() {
    let mut board = [[0u8; 10]; 20];
    board[19][3] = PieceKind::Z.code();
    assert_eq!(fnv1a64_board(&board), reference_hash(&board));
}
