//! 結合テスト: ボット同士の対局と、探索ボット同士の一致を確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use marubatsu_core::ai::types::Bot;
    use marubatsu_core::{ai, arena, engine};

    /// 初期局面から到達可能な非終局局面をすべて列挙する。
    fn reachable_open_states() -> Vec<engine::State> {
        let mut seen = HashSet::new();
        let mut stack = vec![engine::State::initial()];
        let mut out = Vec::new();

        while let Some(state) = stack.pop() {
            if state.is_terminal() || !seen.insert(state) {
                continue;
            }
            out.push(state);
            for mv in state.available_moves() {
                if let Ok(next) = state.transition(mv) {
                    stack.push(next);
                }
            }
        }
        out
    }

    /// `state` に `mv` を適用した局面のミニマックス値。
    fn value_after(state: engine::State, mv: engine::Move) -> Option<ai::Score> {
        let next = state.transition(mv).ok()?;
        ai::minmax::minimax_value(next).ok()
    }

    /// 両者がボットで、手を指すたびに合法性を確認しながら終局まで進める。
    fn play_checked(x_bot: &mut dyn Bot, o_bot: &mut dyn Bot) -> engine::State {
        let mut state = engine::State::initial();

        // 最大9手。
        for _ply in 0_u8..9 {
            let Some(player) = state.current_player() else {
                break;
            };

            let decision = match player {
                engine::Player::X => x_bot.choose_move(state),
                _ => o_bot.choose_move(state),
            };
            assert!(decision.is_ok(), "bot must choose a move, got={decision:?}");

            let Ok(decision) = decision else {
                break;
            };
            assert!(
                state.available_moves().contains(&decision.mv()),
                "bot must choose an available move, got={}",
                decision.mv()
            );

            let next = state.transition(decision.mv());
            assert!(next.is_ok(), "transition must succeed, got={next:?}");
            state = next.unwrap_or(state);
        }

        assert!(state.is_terminal(), "game did not finish within 9 plies:\n{state}");
        state
    }

    /// `minmax` と `alphabeta` の対局は必ず引き分けになる。
    #[test]
    fn optimal_play_always_ties() {
        let pairs: [(Box<dyn Bot>, Box<dyn Bot>); 3] = [
            (Box::new(ai::MinMaxBot::new()), Box::new(ai::MinMaxBot::new())),
            (Box::new(ai::AlphaBetaBot::new()), Box::new(ai::AlphaBetaBot::new())),
            (Box::new(ai::AlphaBetaBot::new()), Box::new(ai::MinMaxBot::new())),
        ];

        for (mut x_bot, mut o_bot) in pairs {
            let state = play_checked(x_bot.as_mut(), o_bot.as_mut());
            assert_eq!(state.winner(), None, "optimal play must tie:\n{state}");
            assert_eq!(state.empty_count(), 0);
        }
    }

    /// `random` は探索ボットに勝てず、常に合法手を選ぶ。
    #[test]
    fn random_never_beats_alphabeta() {
        for seed in 0_u64..16 {
            let mut random = ai::RandomBot::new(seed);
            let mut alphabeta = ai::AlphaBetaBot::new();

            let as_x = play_checked(&mut random, &mut alphabeta);
            assert_ne!(as_x.winner(), Some(engine::Player::X), "seed={seed}\n{as_x}");

            let as_o = play_checked(&mut alphabeta, &mut random);
            assert_ne!(as_o.winner(), Some(engine::Player::O), "seed={seed}\n{as_o}");
        }
    }

    /// 全ての到達可能な局面で `alphabeta` と `minmax` の選ぶ手の価値が一致し、
    /// `alphabeta` の展開ノード数は `minmax` 以下になる。
    #[test]
    fn alphabeta_agrees_with_minimax_everywhere() {
        let states = reachable_open_states();
        assert_eq!(states.len(), 4520);

        for state in states {
            let full = ai::MinMaxBot::new().choose_move(state);
            let pruned = ai::AlphaBetaBot::new().choose_move(state);

            assert!(full.is_ok() && pruned.is_ok(), "search failed for\n{state}");
            let (Ok(full), Ok(pruned)) = (full, pruned) else {
                return;
            };

            assert_eq!(
                value_after(state, full.mv()),
                value_after(state, pruned.mv()),
                "state:\n{state}"
            );
            assert!(
                pruned.work() <= full.work(),
                "alphabeta expanded more nodes ({} > {}) for\n{state}",
                pruned.work(),
                full.work()
            );
        }
    }

    /// 中央から始めた対局で、5手目より前に X が揃うことはない。
    #[test]
    fn no_win_before_the_fifth_ply() {
        for seed in 0_u64..32 {
            let mut x_bot = ai::RandomBot::new(seed);
            let mut o_bot = ai::RandomBot::new(seed.wrapping_add(1000));
            let mut state = engine::State::initial()
                .transition(engine::Move::new(engine::Player::X, 1, 1))
                .unwrap_or_else(|_| engine::State::initial());

            for ply in 2_u8..=9 {
                let Some(player) = state.current_player() else {
                    break;
                };
                let decision = match player {
                    engine::Player::X => x_bot.choose_move(state),
                    _ => o_bot.choose_move(state),
                };
                let Ok(next) = decision.map(|chosen| state.transition(chosen.mv())) else {
                    break;
                };
                state = next.unwrap_or(state);

                if ply < 5 {
                    assert_eq!(state.winner(), None, "seed={seed} ply={ply}\n{state}");
                }
            }
        }
    }

    /// `arena::play_series` が元の構成（random 対 alphabeta）で集計できる。
    #[test]
    fn series_with_default_lineup_finishes() {
        let mut seed = 9_u64;
        let summary = arena::play_series(10, |player| -> Box<dyn Bot> {
            seed = seed.wrapping_mul(31).wrapping_add(7);
            match player {
                engine::Player::X => Box::new(ai::RandomBot::new(seed)),
                _ => Box::new(ai::AlphaBetaBot::new()),
            }
        });
        assert!(summary.is_ok(), "series must finish, got={summary:?}");

        let Ok(summary) = summary else {
            return;
        };
        assert_eq!(summary.games(), 10);
        assert_eq!(summary.x_wins(), 0);
        assert_eq!(summary.o_wins() + summary.ties(), 10);
    }
}
