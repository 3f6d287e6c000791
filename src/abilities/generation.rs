//! Ability score generation methods and background bonuses

use serde::{Deserialize, Serialize};

use super::scores::{AbilityScores, MAX_SCORE};
use crate::core::error::{CharforgeError, Result};
use crate::core::types::Ability;

/// Scores handed out by the standard array method
pub const STANDARD_ARRAY: [u8; 6] = [15, 14, 13, 12, 10, 8];

/// Lowest and highest score purchasable with point buy
pub const POINT_BUY_MIN: u8 = 8;
pub const POINT_BUY_MAX: u8 = 15;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum AbilityMethod {
    #[default]
    StandardArray,
    PointBuy,
    Roll,
}

/// Point cost of one score under point buy; None outside 8..=15
pub fn point_buy_cost(score: u8) -> Option<u32> {
    match score {
        8 => Some(0),
        9 => Some(1),
        10 => Some(2),
        11 => Some(3),
        12 => Some(4),
        13 => Some(5),
        14 => Some(7),
        15 => Some(9),
        _ => None,
    }
}

/// Assign a fixed pool of values (standard array or a rolled set)
///
/// `values` is in `Ability::ALL` order and must be a rearrangement of `pool`.
pub fn assign_from_pool(pool: [u8; 6], values: [u8; 6]) -> Result<AbilityScores> {
    let mut expected = pool;
    let mut actual = values;
    expected.sort_unstable();
    actual.sort_unstable();
    if expected != actual {
        return Err(CharforgeError::InvalidAbilityScores(format!(
            "{:?} is not an arrangement of {:?}",
            values, pool
        )));
    }
    Ok(AbilityScores::from_array(values))
}

/// Validate a point-buy purchase, returning the scores and points spent
pub fn point_buy(values: [u8; 6], budget: u32) -> Result<(AbilityScores, u32)> {
    let mut spent = 0;
    for (ability, score) in Ability::ALL.iter().zip(values) {
        let cost = point_buy_cost(score).ok_or_else(|| {
            CharforgeError::InvalidAbilityScores(format!(
                "{} {} is outside {}..={}",
                ability, score, POINT_BUY_MIN, POINT_BUY_MAX
            ))
        })?;
        spent += cost;
    }

    if spent > budget {
        return Err(CharforgeError::InvalidAbilityScores(format!(
            "point buy costs {} points, budget is {}",
            spent, budget
        )));
    }

    Ok((AbilityScores::from_array(values), spent))
}

/// How a background raises ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundBonus {
    /// +2 to one ability and +1 to a different one
    Split { plus_two: Ability, plus_one: Ability },
    /// +1 to each of the background's three abilities
    Spread,
}

impl BackgroundBonus {
    /// Apply the bonus, restricted to the background's `options`
    pub fn apply(&self, scores: &AbilityScores, options: &[Ability]) -> Result<AbilityScores> {
        let increases: Vec<(Ability, u8)> = match *self {
            BackgroundBonus::Split { plus_two, plus_one } => {
                if plus_two == plus_one {
                    return Err(CharforgeError::InvalidAbilityScores(format!(
                        "+2 and +1 must go to different abilities, both chose {}",
                        plus_two
                    )));
                }
                vec![(plus_two, 2), (plus_one, 1)]
            }
            BackgroundBonus::Spread => options.iter().map(|a| (*a, 1)).collect(),
        };

        let mut raised = *scores;
        for (ability, amount) in increases {
            if !options.contains(&ability) {
                return Err(CharforgeError::InvalidAbilityScores(format!(
                    "background cannot raise {}",
                    ability
                )));
            }
            let value = raised.get(ability).saturating_add(amount);
            if value > MAX_SCORE {
                return Err(CharforgeError::InvalidAbilityScores(format!(
                    "{} would rise to {}, above {}",
                    ability, value, MAX_SCORE
                )));
            }
            raised.set(ability, value);
        }

        Ok(raised)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_array_assignment() {
        let scores = assign_from_pool(STANDARD_ARRAY, [8, 15, 14, 10, 12, 13]).unwrap();
        assert_eq!(scores.dexterity, 15);
        assert_eq!(scores.strength, 8);
    }

    #[test]
    fn test_standard_array_rejects_duplicates() {
        let err = assign_from_pool(STANDARD_ARRAY, [15, 15, 13, 12, 10, 8]).unwrap_err();
        assert!(matches!(err, CharforgeError::InvalidAbilityScores(_)));
    }

    #[test]
    fn test_point_buy_full_budget() {
        // 9 + 9 + 5 + 2 + 2 + 0 = 27
        let (scores, spent) = point_buy([15, 15, 13, 10, 10, 8], 27).unwrap();
        assert_eq!(spent, 27);
        assert_eq!(scores.constitution, 13);
    }

    #[test]
    fn test_point_buy_over_budget() {
        assert!(point_buy([15, 15, 15, 10, 10, 8], 27).is_err());
    }

    #[test]
    fn test_point_buy_out_of_range() {
        assert!(point_buy([16, 8, 8, 8, 8, 8], 27).is_err());
        assert!(point_buy([7, 8, 8, 8, 8, 8], 27).is_err());
    }

    #[test]
    fn test_split_bonus() {
        let base = AbilityScores::from_array(STANDARD_ARRAY);
        let options = [Ability::Strength, Ability::Dexterity, Ability::Constitution];
        let raised = BackgroundBonus::Split {
            plus_two: Ability::Strength,
            plus_one: Ability::Constitution,
        }
        .apply(&base, &options)
        .unwrap();
        assert_eq!(raised.strength, 17);
        assert_eq!(raised.constitution, 14);
        assert_eq!(raised.dexterity, 14);
    }

    #[test]
    fn test_spread_bonus() {
        let base = AbilityScores::from_array(STANDARD_ARRAY);
        let options = [Ability::Intelligence, Ability::Wisdom, Ability::Charisma];
        let raised = BackgroundBonus::Spread.apply(&base, &options).unwrap();
        assert_eq!(raised.intelligence, 13);
        assert_eq!(raised.wisdom, 11);
        assert_eq!(raised.charisma, 9);
    }

    #[test]
    fn test_bonus_outside_options_rejected() {
        let base = AbilityScores::from_array(STANDARD_ARRAY);
        let options = [Ability::Intelligence, Ability::Wisdom, Ability::Charisma];
        let bonus = BackgroundBonus::Split {
            plus_two: Ability::Strength,
            plus_one: Ability::Wisdom,
        };
        assert!(bonus.apply(&base, &options).is_err());
    }

    #[test]
    fn test_bonus_cannot_exceed_twenty() {
        let base = AbilityScores::from_array([19, 10, 10, 10, 10, 10]);
        let options = [Ability::Strength, Ability::Dexterity, Ability::Constitution];
        let bonus = BackgroundBonus::Split {
            plus_two: Ability::Strength,
            plus_one: Ability::Dexterity,
        };
        assert!(bonus.apply(&base, &options).is_err());
    }
}
