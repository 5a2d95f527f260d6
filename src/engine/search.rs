//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search walks the caller's position in place: every move is applied
//! through an [`Applied`] guard that undoes it when dropped, so the position
//! is restored on every exit path, cut-offs and unwinding included.

use std::ops::{Deref, DerefMut};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Color, Move, Piece};
use crate::rules::Rules;

use super::difficulty::Difficulty;
use super::eval::Evaluator;
use super::move_order::order_moves;

/// Bound of the root search window.
pub const INFINITY: i32 = i32::MAX;

/// Best move found at a node and its score. `best_move` is `None` at leaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
}

/// Counters for one top-level search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Nodes scored by the evaluator
    pub leaves: u64,
    /// Beta cut-offs
    pub cutoffs: u64,
}

/// A move applied to a position for the lifetime of the guard.
struct Applied<'a, R: Rules + ?Sized> {
    pos: &'a mut R,
}

impl<'a, R: Rules + ?Sized> Applied<'a, R> {
    /// # Panics
    /// Panics if the rules engine rejects a move it generated itself.
    fn new(pos: &'a mut R, m: &Move) -> Self {
        if let Err(err) = pos.apply(m) {
            panic!("rules engine rejected its own move {m:?}: {err}");
        }
        Applied { pos }
    }
}

impl<R: Rules + ?Sized> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: Rules + ?Sized> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: Rules + ?Sized> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        self.pos.undo();
    }
}

/// Depth-limited minimax over a [`Rules`] position.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    evaluator: Evaluator,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(evaluator: Evaluator) -> Self {
        Searcher {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Score of a node the search does not expand.
    ///
    /// A checkmated side is charged the king's material value, so mate
    /// outweighs any material balance. Stalemate and draws score as the
    /// plain evaluation.
    fn leaf_score<R: Rules + ?Sized>(&mut self, pos: &mut R, game_over: bool) -> i32 {
        self.stats.leaves += 1;
        let score = self.evaluator.evaluate(&*pos);
        if game_over && pos.is_checkmate() {
            score - pos.side_to_move().sign() * Piece::King.value()
        } else {
            score
        }
    }

    /// Alpha-beta search to `depth` plies within the window (`alpha`, `beta`).
    ///
    /// `maximizing` is true when the side to move wants the highest score,
    /// which for evaluator scores means White.
    pub fn alpha_beta<R: Rules + ?Sized>(
        &mut self,
        pos: &mut R,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node(pos, depth, 0, alpha, beta, maximizing)
    }

    fn node<R: Rules + ?Sized>(
        &mut self,
        pos: &mut R,
        depth: u8,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        let game_over = pos.is_game_over();
        if depth == 0 || game_over {
            return SearchResult {
                best_move: None,
                score: self.leaf_score(pos, game_over),
            };
        }

        let mut moves = pos.legal_moves();
        order_moves(&mut moves);

        let mut best_move = None;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for m in moves {
            let score = {
                let mut child = Applied::new(pos, &m);
                self.node(&mut *child, depth - 1, ply + 1, alpha, beta, !maximizing)
                    .score
            };
            if ply == 0 {
                trace!("root {} scored {}", m.san(), score);
            }

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(m);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(m);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
        }
    }

    /// Plain minimax without pruning. Same leaves and scores as
    /// [`Searcher::alpha_beta`] with a full window, at a much higher cost.
    pub fn minimax<R: Rules + ?Sized>(
        &mut self,
        pos: &mut R,
        depth: u8,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        let game_over = pos.is_game_over();
        if depth == 0 || game_over {
            return SearchResult {
                best_move: None,
                score: self.leaf_score(pos, game_over),
            };
        }

        let mut best = SearchResult {
            best_move: None,
            score: if maximizing { -INFINITY } else { INFINITY },
        };
        for m in pos.legal_moves() {
            let score = {
                let mut child = Applied::new(pos, &m);
                self.minimax(&mut *child, depth - 1, !maximizing).score
            };
            let better = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if better {
                best = SearchResult {
                    best_move: Some(m),
                    score,
                };
            }
        }
        best
    }
}

/// Picks moves for a computer player.
///
/// The opponent keeps no game state between calls: it borrows the position
/// for the duration of [`Opponent::select_move`] and hands it back unchanged.
#[derive(Debug)]
pub struct Opponent<G = StdRng> {
    rng: G,
    searcher: Searcher,
}

impl Opponent<StdRng> {
    /// Opponent with an entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Opponent whose random choices repeat for the same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Opponent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Rng> Opponent<G> {
    pub fn with_rng(rng: G) -> Self {
        Opponent {
            rng,
            searcher: Searcher::default(),
        }
    }

    /// Replace the evaluator used by searching difficulties.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.searcher = Searcher::new(evaluator);
        self
    }

    /// Choose a move for the side to move, or `None` when there is none.
    ///
    /// Easy picks uniformly at random. Medium and Hard run alpha-beta to
    /// their depth; should the search name no move, the first generated
    /// move is played. `pos` is restored before this returns.
    pub fn select_move<R: Rules + ?Sized>(
        &mut self,
        pos: &mut R,
        difficulty: Difficulty,
    ) -> Option<Move> {
        self.searcher.reset_stats();

        let mut moves = pos.legal_moves();
        if moves.is_empty() {
            debug!("{difficulty}: no legal moves");
            return None;
        }

        let Some(depth) = difficulty.depth() else {
            let chosen = moves.swap_remove(self.rng.gen_range(0..moves.len()));
            debug!("{difficulty}: random move {}", chosen.san());
            return Some(chosen);
        };

        let maximizing = pos.side_to_move() == Color::White;
        let result = self
            .searcher
            .alpha_beta(pos, depth, -INFINITY, INFINITY, maximizing);
        let stats = self.searcher.stats();

        let chosen = result.best_move.or_else(|| moves.into_iter().next());
        debug!(
            "{difficulty}: depth {depth}, {} nodes, {} leaves, {} cutoffs, chose {} ({})",
            stats.nodes,
            stats.leaves,
            stats.cutoffs,
            chosen.as_ref().map_or("-", Move::san),
            result.score
        );
        chosen
    }

    /// Search a clone of `pos`, leaving the original untouched.
    pub fn select_move_detached<R: Rules + Clone>(
        &mut self,
        pos: &R,
        difficulty: Difficulty,
    ) -> Option<Move> {
        let mut scratch = pos.clone();
        self.select_move(&mut scratch, difficulty)
    }

    /// Counters from the most recent [`Opponent::select_move`].
    #[must_use]
    pub fn last_stats(&self) -> SearchStats {
        self.searcher.stats()
    }
}
