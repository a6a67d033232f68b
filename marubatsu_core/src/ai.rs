/// アルファベータ枝刈り付きのミニマックス探索ボット。
pub mod alphabeta;
/// ゲーム木全体を展開するミニマックス探索ボット。
pub mod minmax;
/// 合法手からランダムに1手選ぶボット。
pub mod random;
/// 必要になった子だけを展開するゲーム木。
pub mod search_tree;
pub mod types;
/// 終局局面の効用関数。
pub mod utility;

pub type AlphaBetaBot = alphabeta::Agent;
pub type Decision = types::Decision;
pub type GameTree = search_tree::GameTree;
pub type MinMaxBot = minmax::Agent;
pub type RandomBot = random::Agent;
pub type Score = types::Score;
pub type SearchError = types::SearchError;
