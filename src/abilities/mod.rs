//! Ability scores: generation methods, background bonuses, dice

pub mod dice;
pub mod generation;
pub mod scores;

pub use dice::DiceRoller;
pub use generation::{
    assign_from_pool, point_buy, point_buy_cost, AbilityMethod, BackgroundBonus, STANDARD_ARRAY,
};
pub use scores::{modifier, AbilityScores, MAX_SCORE};
