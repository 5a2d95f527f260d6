use super::{Board, Color, Move, MoveFlags, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// Legal moves for the side to move, with SAN filled in.
    ///
    /// Moves are listed in generation order: by origin square from a1 to h8,
    /// then by direction.
    pub fn generate_moves(&mut self) -> Vec<Move> {
        let mut moves = self.generate_legal();
        self.annotate_san(&mut moves);
        moves
    }

    /// Legal moves without notation. Used by perft and legality checks.
    pub(crate) fn generate_legal(&mut self) -> Vec<Move> {
        let mut moves = self.generate_pseudo_moves();
        moves.retain(|m| self.leaves_king_safe(m));
        moves
    }

    /// True when the side to move has at least one legal move.
    pub(crate) fn has_legal_move(&mut self) -> bool {
        let pseudo = self.generate_pseudo_moves();
        pseudo.iter().any(|m| self.leaves_king_safe(m))
    }

    pub(crate) fn leaves_king_safe(&mut self, m: &Move) -> bool {
        let color = self.side_to_move;
        let opponent = color.opponent();

        if m.is_castling() {
            let mid_file = (m.from().file() + m.to().file()) / 2;
            let passes_attack = [m.from().file(), mid_file, m.to().file()]
                .into_iter()
                .filter_map(|file| Square::new(m.from().rank(), file))
                .any(|sq| self.is_square_attacked(sq, opponent));
            if passes_attack {
                return false;
            }
        }

        let info = self.make_move(m);
        let safe = !self.is_in_check(color);
        self.unmake_move(m, info);
        safe
    }

    pub(crate) fn generate_pseudo_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        let color = self.side_to_move;

        for from in Square::all() {
            match self.piece_at(from) {
                Some((c, Piece::Pawn)) if c == color => self.generate_pawn_moves(from, &mut moves),
                Some((c, piece @ (Piece::Knight | Piece::King))) if c == color => {
                    self.generate_step_moves(from, piece, &mut moves);
                    if piece == Piece::King {
                        self.generate_castling_moves(from, &mut moves);
                    }
                }
                Some((c, piece)) if c == color => self.generate_sliding_moves(from, piece, &mut moves),
                _ => {}
            }
        }
        moves
    }

    fn create_move(
        &self,
        from: Square,
        to: Square,
        piece: Piece,
        promotion: Option<Piece>,
        flags: MoveFlags,
    ) -> Move {
        let captured = if flags.contains(MoveFlags::EN_PASSANT) {
            Some(Piece::Pawn)
        } else if flags.contains(MoveFlags::CASTLE_KINGSIDE)
            || flags.contains(MoveFlags::CASTLE_QUEENSIDE)
        {
            None
        } else {
            self.piece_at(to).map(|(_, p)| p)
        };

        Move::new(from, to, piece, promotion, captured, flags)
    }

    fn push_pawn_move(&self, from: Square, to: Square, moves: &mut Vec<Move>) {
        if to.rank() == self.side_to_move.pawn_promotion_rank() {
            for promo in PROMOTION_PIECES {
                moves.push(self.create_move(from, to, Piece::Pawn, Some(promo), MoveFlags::NONE));
            }
        } else {
            moves.push(self.create_move(from, to, Piece::Pawn, None, MoveFlags::NONE));
        }
    }

    fn generate_pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.piece_at(forward).is_none() {
                self.push_pawn_move(from, forward, moves);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.piece_at(double).is_none() {
                            moves.push(self.create_move(
                                from,
                                double,
                                Piece::Pawn,
                                None,
                                MoveFlags::DOUBLE_PAWN_PUSH,
                            ));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => {
                    self.push_pawn_move(from, target, moves);
                }
                None if Some(target) == self.en_passant_target => {
                    moves.push(self.create_move(
                        from,
                        target,
                        Piece::Pawn,
                        None,
                        MoveFlags::EN_PASSANT,
                    ));
                }
                _ => {}
            }
        }
    }

    fn generate_step_moves(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for &(dr, df) in piece.offsets() {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            if self.piece_at(to).map_or(true, |(c, _)| c != color) {
                moves.push(self.create_move(from, to, piece, None, MoveFlags::NONE));
            }
        }
    }

    fn generate_sliding_moves(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for &(dr, df) in piece.offsets() {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.push(self.create_move(from, to, piece, None, MoveFlags::NONE)),
                    Some((c, _)) => {
                        if c != color {
                            moves.push(self.create_move(from, to, piece, None, MoveFlags::NONE));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    fn generate_castling_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let back_rank = color.back_rank();
        if from.rank() != back_rank || from.file() != 4 {
            return;
        }
        let empty = |file: usize| {
            Square::new(back_rank, file).map_or(false, |sq| self.piece_at(sq).is_none())
        };
        let rook_on = |file: usize| {
            Square::new(back_rank, file)
                .map_or(false, |sq| self.piece_at(sq) == Some((color, Piece::Rook)))
        };

        if self.castling_rights.has(color, true) && empty(5) && empty(6) && rook_on(7) {
            if let Some(to) = Square::new(back_rank, 6) {
                moves.push(self.create_move(
                    from,
                    to,
                    Piece::King,
                    None,
                    MoveFlags::CASTLE_KINGSIDE,
                ));
            }
        }
        if self.castling_rights.has(color, false) && empty(1) && empty(2) && empty(3) && rook_on(0)
        {
            if let Some(to) = Square::new(back_rank, 2) {
                moves.push(self.create_move(
                    from,
                    to,
                    Piece::King,
                    None,
                    MoveFlags::CASTLE_QUEENSIDE,
                ));
            }
        }
    }

    /// True if any piece of `attacker_color` attacks `square`.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        let holds = |sq: Option<Square>, piece: Piece| {
            sq.and_then(|sq| self.piece_at(sq)) == Some((attacker_color, piece))
        };

        // A pawn attacks diagonally forward, so look one rank behind the target.
        let back = -attacker_color.pawn_direction();
        if holds(square.offset(back, -1), Piece::Pawn) || holds(square.offset(back, 1), Piece::Pawn)
        {
            return true;
        }

        for piece in [Piece::Knight, Piece::King] {
            if piece
                .offsets()
                .iter()
                .any(|&(dr, df)| holds(square.offset(dr, df), piece))
            {
                return true;
            }
        }

        for slider in [Piece::Bishop, Piece::Rook] {
            for &(dr, df) in slider.offsets() {
                let mut current = square;
                while let Some(next) = current.offset(dr, df) {
                    if let Some((color, piece)) = self.piece_at(next) {
                        if color == attacker_color && (piece == slider || piece == Piece::Queen) {
                            return true;
                        }
                        break;
                    }
                    current = next;
                }
            }
        }

        false
    }

    #[must_use]
    pub(crate) fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .map_or(false, |king| self.is_square_attacked(king, color.opponent()))
    }

    /// True when the side to move is in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_check() && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_check() && !self.has_legal_move()
    }

    /// Checkmate, stalemate, or a drawn position.
    pub fn is_game_over(&mut self) -> bool {
        self.is_draw() || !self.has_legal_move()
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            let info = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m, info);
        }
        nodes
    }
}
