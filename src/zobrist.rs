//! Zobrist keys for position hashing.
//!
//! Keys are drawn from a splitmix64 stream with a fixed seed, so every
//! run of the program produces the same hashes; perft-hash regressions
//! stay reproducible.

use std::sync::OnceLock;

use crate::board::{Board, Color, PieceKind};
use crate::utils;

struct Keys {
    // [color][kind][square]
    piece: [[[u64; 64]; 6]; 2],
    castling: [u64; 16],
    ep_file: [u64; 8],
    side: u64,
}

static KEYS: OnceLock<Keys> = OnceLock::new();

const SEED: u64 = 0x5CAC_C1A7_0B0A_4D01;

fn split_mix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

fn build_keys() -> Keys {
    let mut state = SEED;
    let mut piece = [[[0u64; 64]; 6]; 2];
    for color in piece.iter_mut() {
        for kind in color.iter_mut() {
            for key in kind.iter_mut() {
                *key = split_mix64(&mut state);
            }
        }
    }
    let mut castling = [0u64; 16];
    for key in castling.iter_mut() {
        *key = split_mix64(&mut state);
    }
    let mut ep_file = [0u64; 8];
    for key in ep_file.iter_mut() {
        *key = split_mix64(&mut state);
    }
    let side = split_mix64(&mut state);
    Keys {
        piece,
        castling,
        ep_file,
        side,
    }
}

#[inline]
fn keys() -> &'static Keys {
    KEYS.get_or_init(build_keys)
}

/// Force key generation up front (otherwise lazy on first query).
pub fn init() {
    keys();
}

#[inline]
pub fn piece(color: Color, kind: PieceKind, sq: usize) -> u64 {
    keys().piece[color.index()][kind.index()][sq]
}

#[inline]
pub fn castling(rights: u8) -> u64 {
    keys().castling[rights as usize]
}

#[inline]
pub fn ep_file(file: usize) -> u64 {
    keys().ep_file[file]
}

#[inline]
pub fn side() -> u64 {
    keys().side
}

/// From-scratch recomputation of `(zobrist, pawn_key)` for a board.
/// The incremental keys maintained by make/undo must always agree with
/// this; `pos_is_ok` and the invariant tests compare against it.
pub fn compute(board: &Board) -> (u64, u64) {
    let mut hash = 0u64;
    let mut pawn_key = 0u64;
    for color in [Color::White, Color::Black] {
        for kind in PieceKind::ALL {
            let mut bb = board.pieces_of(color, kind);
            while let Some(sq) = utils::pop_lsb(&mut bb) {
                let key = piece(color, kind, sq);
                hash ^= key;
                if kind == PieceKind::Pawn || kind == PieceKind::King {
                    pawn_key ^= key;
                }
            }
        }
    }
    hash ^= castling(board.castling_rights());
    if let Some(ep) = board.ep_square() {
        let key = ep_file(utils::file_of(ep));
        hash ^= key;
        pawn_key ^= key;
    }
    if board.side_to_move() == Color::Black {
        hash ^= side();
    }
    (hash, pawn_key)
}
