//! Compact move descriptor.
//!
//! A move packs (from, to, moved, captured, promoted) into a `u32`:
//! bits 0-5 from, 6-11 to, 12-14 moved, 15-17 captured, 18-20 promoted,
//! with 6 meaning "none" in the captured/promoted fields. The promoted
//! field is overloaded to mark the special moves without a separate tag:
//! a King moving with promoted = Rook is a castle, a Pawn moving with
//! promoted = Pawn is an en-passant capture. A null move has from == to.
//!
//! Equality compares only (from, to).

use std::fmt;

use crate::board::PieceKind;
use crate::utils;

const FIELD_NONE: u32 = 6;

#[derive(Clone, Copy)]
pub struct Move(u32);

impl Move {
    pub fn new(
        from: usize,
        to: usize,
        moved: PieceKind,
        captured: Option<PieceKind>,
        promoted: Option<PieceKind>,
    ) -> Move {
        let cap = captured.map_or(FIELD_NONE, |p| p.index() as u32);
        let prom = promoted.map_or(FIELD_NONE, |p| p.index() as u32);
        Move(
            (from as u32 & 0x3F)
                | ((to as u32 & 0x3F) << 6)
                | ((moved.index() as u32) << 12)
                | (cap << 15)
                | (prom << 18),
        )
    }

    pub fn quiet(from: usize, to: usize, moved: PieceKind) -> Move {
        Move::new(from, to, moved, None, None)
    }

    pub fn capture(from: usize, to: usize, moved: PieceKind, captured: PieceKind) -> Move {
        Move::new(from, to, moved, Some(captured), None)
    }

    pub fn promotion(
        from: usize,
        to: usize,
        captured: Option<PieceKind>,
        promoted: PieceKind,
    ) -> Move {
        Move::new(from, to, PieceKind::Pawn, captured, Some(promoted))
    }

    /// En passant: a pawn move marked by the overloaded promoted field.
    pub fn en_passant(from: usize, to: usize) -> Move {
        Move::new(
            from,
            to,
            PieceKind::Pawn,
            Some(PieceKind::Pawn),
            Some(PieceKind::Pawn),
        )
    }

    /// Castle: the king's move, marked by promoted = Rook.
    pub fn castle(from: usize, to: usize) -> Move {
        Move::new(from, to, PieceKind::King, None, Some(PieceKind::Rook))
    }

    pub fn null() -> Move {
        Move::new(0, 0, PieceKind::Pawn, None, None)
    }

    #[inline]
    pub fn from(self) -> usize {
        (self.0 & 0x3F) as usize
    }

    #[inline]
    pub fn to(self) -> usize {
        ((self.0 >> 6) & 0x3F) as usize
    }

    #[inline]
    pub fn piece_moved(self) -> PieceKind {
        PieceKind::from_index(((self.0 >> 12) & 0x7) as usize)
    }

    #[inline]
    fn captured_raw(self) -> u32 {
        (self.0 >> 15) & 0x7
    }

    #[inline]
    fn promoted_raw(self) -> u32 {
        (self.0 >> 18) & 0x7
    }

    #[inline]
    pub fn captured(self) -> Option<PieceKind> {
        match self.captured_raw() {
            FIELD_NONE => None,
            raw => Some(PieceKind::from_index(raw as usize)),
        }
    }

    #[inline]
    pub fn promoted(self) -> Option<PieceKind> {
        match self.promoted_raw() {
            FIELD_NONE => None,
            raw => Some(PieceKind::from_index(raw as usize)),
        }
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.from() == self.to()
    }

    #[inline]
    pub fn is_capture(self) -> bool {
        self.captured_raw() != FIELD_NONE
    }

    #[inline]
    pub fn is_castle(self) -> bool {
        self.piece_moved() == PieceKind::King
            && self.promoted_raw() == PieceKind::Rook.index() as u32
    }

    #[inline]
    pub fn is_castle_short(self) -> bool {
        self.is_castle() && utils::file_of(self.to()) == 6
    }

    #[inline]
    pub fn is_castle_long(self) -> bool {
        self.is_castle() && utils::file_of(self.to()) == 2
    }

    #[inline]
    pub fn is_en_passant(self) -> bool {
        self.piece_moved() == PieceKind::Pawn
            && self.promoted_raw() == PieceKind::Pawn.index() as u32
    }

    #[inline]
    pub fn is_promotion(self) -> bool {
        self.piece_moved() == PieceKind::Pawn
            && matches!(
                self.promoted(),
                Some(p) if p != PieceKind::Pawn
            )
    }

    /// UCI long-algebraic form: "e2e4", "e7e8q", "e1g1" for a castle,
    /// "0000" for the null move.
    pub fn to_uci(self) -> String {
        if self.is_null() {
            return "0000".to_string();
        }
        let mut out = format!(
            "{}{}",
            utils::square_to_coord(self.from()),
            utils::square_to_coord(self.to())
        );
        if self.is_promotion() {
            out.push(match self.promoted() {
                Some(PieceKind::Knight) => 'n',
                Some(PieceKind::Bishop) => 'b',
                Some(PieceKind::Rook) => 'r',
                _ => 'q',
            });
        }
        out
    }

    /// Simple algebraic rendering for logs: "O-O", "O-O-O", "e2xe4",
    /// promotions suffixed with the piece initial.
    pub fn to_algebraic(self) -> String {
        if self.is_castle() {
            return if self.is_castle_short() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }
        let mut out = utils::square_to_coord(self.from());
        if self.is_capture() {
            out.push('x');
        }
        out.push_str(&utils::square_to_coord(self.to()));
        if self.is_promotion() {
            out.push(match self.promoted() {
                Some(PieceKind::Knight) => 'N',
                Some(PieceKind::Bishop) => 'B',
                Some(PieceKind::Rook) => 'R',
                _ => 'Q',
            });
        } else if self.is_en_passant() {
            out.push_str("e.p.");
        }
        out
    }
}

impl PartialEq for Move {
    #[inline]
    fn eq(&self, other: &Move) -> bool {
        (self.0 ^ other.0) & 0xFFF == 0
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_round_trip() {
        let m = Move::new(
            12,
            28,
            PieceKind::Pawn,
            Some(PieceKind::Knight),
            Some(PieceKind::Queen),
        );
        assert_eq!(m.from(), 12);
        assert_eq!(m.to(), 28);
        assert_eq!(m.piece_moved(), PieceKind::Pawn);
        assert_eq!(m.captured(), Some(PieceKind::Knight));
        assert_eq!(m.promoted(), Some(PieceKind::Queen));
        assert!(m.is_promotion());
        assert!(m.is_capture());
        assert!(!m.is_castle());
        assert!(!m.is_en_passant());
    }

    #[test]
    fn overloaded_encodings() {
        let castle = Move::castle(4, 6);
        assert!(castle.is_castle() && castle.is_castle_short());
        assert!(!castle.is_promotion());
        assert_eq!(castle.to_uci(), "e1g1");
        assert_eq!(castle.to_algebraic(), "O-O");

        let long = Move::castle(60, 58);
        assert!(long.is_castle_long());
        assert_eq!(long.to_algebraic(), "O-O-O");

        let ep = Move::en_passant(36, 43);
        assert!(ep.is_en_passant() && ep.is_capture());
        assert!(!ep.is_promotion());

        assert!(Move::null().is_null());
        assert_eq!(Move::null().to_uci(), "0000");
    }

    #[test]
    fn equality_ignores_everything_but_the_squares() {
        let a = Move::quiet(12, 28, PieceKind::Pawn);
        let b = Move::capture(12, 28, PieceKind::Pawn, PieceKind::Queen);
        assert_eq!(a, b);
        let c = Move::quiet(12, 20, PieceKind::Pawn);
        assert_ne!(a, c);
    }

    #[test]
    fn uci_rendering() {
        let m = Move::quiet(12, 28, PieceKind::Pawn);
        assert_eq!(m.to_uci(), "e2e4");
        let p = Move::promotion(52, 60, None, PieceKind::Knight);
        assert_eq!(p.to_uci(), "e7e8n");
        let cap = Move::capture(12, 28, PieceKind::Pawn, PieceKind::Knight);
        assert_eq!(cap.to_algebraic(), "e2xe4");
    }
}
