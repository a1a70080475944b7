/// アルファベータ探索AI。
pub mod alphabeta;
/// 探索用の全合法手列挙。
pub mod move_list;
/// 合法手からランダムに1手選ぶAI。
pub mod random;
pub mod types;
