//! Interactive character-building session

use crate::abilities::{
    assign_from_pool, point_buy, point_buy_cost, AbilityMethod, AbilityScores, BackgroundBonus,
    DiceRoller, STANDARD_ARRAY,
};
use crate::catalog::CatalogSet;
use crate::character::{CharacterBuilder, CharacterRecord};
use crate::core::config::BuilderConfig;
use crate::core::error::{CharforgeError, Result};
use crate::core::types::Ability;
use crate::rules::{BackgroundDef, RulesRegistry, StartingKit};

use super::prompt::ChoiceProvider;

/// Walk the user through species, class, background, scores, kits and name
pub fn run_build_session<P: ChoiceProvider + ?Sized>(
    prompter: &mut P,
    registry: &RulesRegistry,
    catalogs: &CatalogSet,
    config: &BuilderConfig,
) -> Result<CharacterRecord> {
    tracing::info!("Starting build session ({:?})", config.ability_method);
    let mut builder = CharacterBuilder::new(registry);

    let species: Vec<String> = registry.species.iter().map(|s| s.name.clone()).collect();
    let pick = prompter.choose("Choose a species", &species)?;
    builder.species(&species[pick])?;

    let classes: Vec<String> = registry
        .classes
        .iter()
        .map(|c| format!("{} (d{}, {})", c.name, c.hit_die, c.primary_ability.name()))
        .collect();
    let class = &registry.classes[prompter.choose("Choose a class", &classes)?];
    builder.class(&class.name)?;

    let picks = prompter.choose_many("Choose class skills", &class.skill_choices, class.skill_count)?;
    let skills: Vec<&str> = picks.iter().map(|i| class.skill_choices[*i].as_str()).collect();
    builder.skills(&skills)?;

    let backgrounds: Vec<String> = registry
        .backgrounds
        .iter()
        .map(|b| format!("{} ({})", b.name, b.feat))
        .collect();
    let background = &registry.backgrounds[prompter.choose("Choose a background", &backgrounds)?];
    builder.background(&background.name)?;

    builder.ability_scores(ask_ability_scores(prompter, config)?);
    builder.background_bonus(ask_background_bonus(prompter, background)?);

    let kit = prompter.choose("Choose class equipment", &kit_summaries(&class.starting_kits))?;
    builder.class_kit(kit)?;
    let kit = prompter.choose(
        "Choose background equipment",
        &kit_summaries(&background.starting_kits),
    )?;
    builder.background_kit(kit)?;

    let name = prompter.text("Name your character")?;
    builder.name(name.as_str());

    let record = builder.build(catalogs)?;
    if !prompter.confirm(&format!("Create {}?", record.name))? {
        return Err(CharforgeError::Aborted);
    }
    Ok(record)
}

fn kit_summaries(kits: &[StartingKit]) -> Vec<String> {
    kits.iter().map(StartingKit::summary).collect()
}

fn ask_ability_scores<P: ChoiceProvider + ?Sized>(
    prompter: &mut P,
    config: &BuilderConfig,
) -> Result<AbilityScores> {
    match config.ability_method {
        AbilityMethod::StandardArray => assign_pool(prompter, STANDARD_ARRAY, "Standard array"),
        AbilityMethod::Roll => {
            let rolled = DiceRoller::new(config.seed).roll_ability_set();
            assign_pool(prompter, rolled, &format!("Rolled {:?}", rolled))
        }
        AbilityMethod::PointBuy => buy_scores(prompter, config.point_buy_budget),
    }
}

/// Hand out each pool value to one ability; the last value is assigned automatically
fn assign_pool<P: ChoiceProvider + ?Sized>(
    prompter: &mut P,
    pool: [u8; 6],
    heading: &str,
) -> Result<AbilityScores> {
    let mut remaining = pool.to_vec();
    let mut values = [0u8; 6];

    for (slot, ability) in values.iter_mut().zip(Ability::ALL) {
        let pick = if remaining.len() == 1 {
            0
        } else {
            let options: Vec<String> = remaining.iter().map(u8::to_string).collect();
            prompter.choose(&format!("{}: score for {}", heading, ability.name()), &options)?
        };
        *slot = remaining.remove(pick);
    }

    assign_from_pool(pool, values)
}

fn buy_scores<P: ChoiceProvider + ?Sized>(prompter: &mut P, budget: u32) -> Result<AbilityScores> {
    let mut left = budget;
    let mut values = [0u8; 6];

    for (slot, ability) in values.iter_mut().zip(Ability::ALL) {
        let affordable: Vec<(u8, u32)> = (8..=15u8)
            .filter_map(|score| point_buy_cost(score).map(|cost| (score, cost)))
            .filter(|(_, cost)| *cost <= left)
            .collect();
        let options: Vec<String> = affordable
            .iter()
            .map(|(score, cost)| format!("{} ({} pts)", score, cost))
            .collect();

        let pick = prompter.choose(
            &format!("Point buy, {} points left: score for {}", left, ability.name()),
            &options,
        )?;
        let (score, cost) = affordable[pick];
        *slot = score;
        left -= cost;
    }

    let (scores, spent) = point_buy(values, budget)?;
    tracing::debug!("Point buy spent {} of {}", spent, budget);
    Ok(scores)
}

fn ask_background_bonus<P: ChoiceProvider + ?Sized>(
    prompter: &mut P,
    background: &BackgroundDef,
) -> Result<BackgroundBonus> {
    let names: Vec<String> = background
        .ability_options
        .iter()
        .map(|a| a.name().to_string())
        .collect();

    let styles = vec![
        "+2 to one ability, +1 to another".to_string(),
        format!("+1 to each of {}", names.join(", ")),
    ];
    if prompter.choose(&format!("{} ability increase", background.name), &styles)? == 1 {
        return Ok(BackgroundBonus::Spread);
    }

    let first = prompter.choose("Ability to raise by 2", &names)?;
    let plus_two = background.ability_options[first];

    let rest: Vec<Ability> = background
        .ability_options
        .iter()
        .copied()
        .filter(|a| *a != plus_two)
        .collect();
    let rest_names: Vec<String> = rest.iter().map(|a| a.name().to_string()).collect();
    let second = prompter.choose("Ability to raise by 1", &rest_names)?;

    Ok(BackgroundBonus::Split {
        plus_two,
        plus_one: rest[second],
    })
}
