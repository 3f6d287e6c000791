//! Step-by-step character assembly
//!
//! Each setter checks its choice against the rules tables; `build` resolves
//! the chosen starting kits and derives the remaining stats.

use crate::abilities::{AbilityScores, BackgroundBonus};
use crate::catalog::CatalogSet;
use crate::core::error::{CharforgeError, Result};
use crate::core::types::{Ability, CharacterId};
use crate::equipment::resolve;
use crate::rules::{BackgroundDef, ClassDef, RulesRegistry, SpeciesDef, StartingKit};

use super::derived::{armor_class, max_hit_points};
use super::record::{CharacterRecord, Proficiencies};

pub struct CharacterBuilder<'r> {
    registry: &'r RulesRegistry,
    name: Option<String>,
    species: Option<&'r SpeciesDef>,
    class: Option<&'r ClassDef>,
    background: Option<&'r BackgroundDef>,
    base_scores: Option<AbilityScores>,
    bonus: Option<BackgroundBonus>,
    class_kit: usize,
    background_kit: usize,
    skills: Vec<String>,
}

impl<'r> CharacterBuilder<'r> {
    pub fn new(registry: &'r RulesRegistry) -> Self {
        Self {
            registry,
            name: None,
            species: None,
            class: None,
            background: None,
            base_scores: None,
            bonus: None,
            class_kit: 0,
            background_kit: 0,
            skills: Vec::new(),
        }
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn species(&mut self, name: &str) -> Result<&mut Self> {
        let species = self
            .registry
            .find_species(name)
            .ok_or_else(|| CharforgeError::UnknownSpecies(name.to_string()))?;
        self.species = Some(species);
        Ok(self)
    }

    /// Choosing a class resets its kit and skill picks
    pub fn class(&mut self, name: &str) -> Result<&mut Self> {
        let class = self
            .registry
            .find_class(name)
            .ok_or_else(|| CharforgeError::UnknownClass(name.to_string()))?;
        self.class = Some(class);
        self.class_kit = 0;
        self.skills.clear();
        Ok(self)
    }

    /// Choosing a background resets its kit
    pub fn background(&mut self, name: &str) -> Result<&mut Self> {
        let background = self
            .registry
            .find_background(name)
            .ok_or_else(|| CharforgeError::UnknownBackground(name.to_string()))?;
        self.background = Some(background);
        self.background_kit = 0;
        Ok(self)
    }

    /// Scores before the background bonus
    pub fn ability_scores(&mut self, scores: AbilityScores) -> &mut Self {
        self.base_scores = Some(scores);
        self
    }

    /// Checked against the background when the character is built
    pub fn background_bonus(&mut self, bonus: BackgroundBonus) -> &mut Self {
        self.bonus = Some(bonus);
        self
    }

    pub fn class_kit(&mut self, index: usize) -> Result<&mut Self> {
        let class = self.class.ok_or(CharforgeError::IncompleteCharacter("class"))?;
        check_kit(&class.name, &class.starting_kits, index)?;
        self.class_kit = index;
        Ok(self)
    }

    pub fn background_kit(&mut self, index: usize) -> Result<&mut Self> {
        let background = self
            .background
            .ok_or(CharforgeError::IncompleteCharacter("background"))?;
        check_kit(&background.name, &background.starting_kits, index)?;
        self.background_kit = index;
        Ok(self)
    }

    /// Class skill picks; exactly the class's skill count, distinct, from its list
    pub fn skills<S: AsRef<str>>(&mut self, picks: &[S]) -> Result<&mut Self> {
        let class = self.class.ok_or(CharforgeError::IncompleteCharacter("class"))?;

        let mut chosen: Vec<String> = Vec::with_capacity(picks.len());
        for pick in picks {
            let pick = pick.as_ref().trim();
            let skill = class
                .skill_choices
                .iter()
                .find(|s| s.eq_ignore_ascii_case(pick))
                .ok_or_else(|| {
                    CharforgeError::InvalidConfig(format!("{} cannot pick skill '{}'", class.name, pick))
                })?;
            if chosen.contains(skill) {
                return Err(CharforgeError::InvalidConfig(format!(
                    "skill '{}' picked twice",
                    skill
                )));
            }
            chosen.push(skill.clone());
        }

        if chosen.len() != class.skill_count {
            return Err(CharforgeError::InvalidConfig(format!(
                "{} picks {} skills, got {}",
                class.name,
                class.skill_count,
                chosen.len()
            )));
        }

        self.skills = chosen;
        Ok(self)
    }

    /// Option strings of the chosen class kit followed by the background kit
    pub fn equipment_options(&self) -> Result<Vec<String>> {
        let class = self.class.ok_or(CharforgeError::IncompleteCharacter("class"))?;
        let background = self
            .background
            .ok_or(CharforgeError::IncompleteCharacter("background"))?;

        // Tables loaded from TOML may define a class without any kit
        let mut options = class
            .starting_kits
            .get(self.class_kit)
            .map(|kit| kit.items.clone())
            .unwrap_or_default();
        if let Some(kit) = background.starting_kits.get(self.background_kit) {
            options.extend(kit.items.iter().cloned());
        }
        Ok(options)
    }

    pub fn build(&self, catalogs: &CatalogSet) -> Result<CharacterRecord> {
        let name = self
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .ok_or(CharforgeError::IncompleteCharacter("name"))?;
        let species = self.species.ok_or(CharforgeError::IncompleteCharacter("species"))?;
        let class = self.class.ok_or(CharforgeError::IncompleteCharacter("class"))?;
        let background = self
            .background
            .ok_or(CharforgeError::IncompleteCharacter("background"))?;
        let base = self
            .base_scores
            .ok_or(CharforgeError::IncompleteCharacter("set of ability scores"))?;
        if self.skills.len() != class.skill_count {
            return Err(CharforgeError::IncompleteCharacter("skill selection"));
        }

        let abilities = match self.bonus {
            Some(bonus) => bonus.apply(&base, &background.ability_options)?,
            None => base,
        };

        let resolution = resolve(&self.equipment_options()?, catalogs);

        let dex = abilities.modifier(Ability::Dexterity);
        let con = abilities.modifier(Ability::Constitution);

        let mut skills = background.skills.clone();
        for skill in &self.skills {
            if !skills.contains(skill) {
                skills.push(skill.clone());
            }
        }

        let record = CharacterRecord {
            id: CharacterId::new(),
            name,
            species: species.name.clone(),
            class: class.name.clone(),
            background: background.name.clone(),
            level: 1,
            abilities,
            max_hp: max_hit_points(class.hit_die, con, species.hit_point_bonus),
            armor_class: armor_class(&resolution.equipment, catalogs, dex),
            speed: species.speed,
            proficiencies: Proficiencies {
                saving_throws: class.saving_throws.clone(),
                skills,
            },
            feat: background.feat.clone(),
            traits: species.traits.clone(),
            equipment: resolution.equipment,
            inventory: resolution.inventory,
            purse: resolution.purse,
        };

        tracing::info!(
            "Assembled {} the {} {} ({} equipment, {} inventory, {})",
            record.name,
            record.species,
            record.class,
            record.equipment.len(),
            record.inventory.len(),
            record.purse
        );

        Ok(record)
    }
}

fn check_kit(owner: &str, kits: &[StartingKit], index: usize) -> Result<()> {
    if index >= kits.len() {
        return Err(CharforgeError::KitOutOfRange {
            owner: owner.to_string(),
            index,
            available: kits.len(),
        });
    }
    Ok(())
}
