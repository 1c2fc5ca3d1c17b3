pub mod player_result;
pub mod score_mode;
pub mod sort_key;
