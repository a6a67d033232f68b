//! Tic-Tac-Toe（〇×ゲーム）の探索コア。
//!
//! このクレートは盤面と遷移規則を扱う `engine`、ゲーム木と探索ボットを提供する `ai`、
//! ボット同士の対局を進める `arena` を提供します。
//! CLI（`marubatsu_cli`）から利用されることを想定しています。

#![forbid(unsafe_code)]

extern crate alloc;

/// ゲームルール・局面を提供するモジュール。
pub mod engine;

/// ゲーム木と手選択アルゴリズム（ボット）を提供するモジュール。
pub mod ai;

/// ボット同士の対局と集計を提供するモジュール。
pub mod arena;
