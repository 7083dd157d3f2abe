//! Perft: exhaustive legal-move tree counts used to validate move legality.

use std::thread;

use crate::game_state::chess_types::{ChessMove, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::push_move;
use crate::move_generation::legal_move_checks::{get_threats, king_square};
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub double_checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    perft_recurse(position, depth, &mut total);
    total
}

/// Same counts as `perft`, with one scoped worker thread per root move.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(position, depth);
    }

    let root_moves = legal_moves(position);
    let mut total = PerftCounts::default();

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut child = position.ghost();
                    push_move(&mut child, mv.from, mv.to);
                    perft(&child, depth - 1)
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });

    total
}

fn perft_recurse(position: &Position, depth: u8, counts: &mut PerftCounts) {
    for mv in legal_moves(position) {
        let mut child = position.ghost();
        push_move(&mut child, mv.from, mv.to);

        if depth == 1 {
            count_leaf(position, mv, &child, counts);
        } else {
            perft_recurse(&child, depth - 1, counts);
        }
    }
}

fn count_leaf(before: &Position, mv: ChessMove, after: &Position, counts: &mut PerftCounts) {
    counts.nodes += 1;

    let Some(piece) = before.board.get(mv.from) else {
        return;
    };
    let is_pawn = piece.kind == PieceKind::Pawn;
    let is_en_passant = is_pawn && mv.from.file != mv.to.file && !before.board.has(mv.to);

    if before.board.has(mv.to) || is_en_passant {
        counts.captures += 1;
    }
    if is_en_passant {
        counts.en_passant += 1;
    }
    if piece.kind == PieceKind::King && (mv.to.file - mv.from.file).abs() == 2 {
        counts.castles += 1;
    }
    if is_pawn && mv.to.rank == piece.color.promotion_rank() {
        counts.promotions += 1;
    }

    let defender = after.side_to_move;
    let Some(king) = king_square(after, defender) else {
        return;
    };
    let checkers = get_threats(after, defender, king).len();
    if checkers > 0 {
        counts.checks += 1;
        if checkers > 1 {
            counts.double_checks += 1;
        }
        if !has_any_legal_move(after) {
            counts.checkmates += 1;
        }
    }
}
