//! Built-in rules tables

use super::tables::{BackgroundDef, ClassDef, SpeciesDef, StartingKit};
use crate::core::types::Ability::{self, *};
use crate::core::types::Size;

pub fn species() -> Vec<SpeciesDef> {
    vec![
        species_def(
            "Aasimar",
            Size::Medium,
            30,
            &["Celestial Resistance", "Darkvision", "Healing Hands", "Light Bearer", "Celestial Revelation"],
        ),
        species_def(
            "Dragonborn",
            Size::Medium,
            30,
            &["Draconic Ancestry", "Breath Weapon", "Damage Resistance", "Darkvision", "Draconic Flight"],
        ),
        SpeciesDef {
            hit_point_bonus: 1,
            ..species_def(
                "Dwarf",
                Size::Medium,
                30,
                &["Darkvision", "Dwarven Resilience", "Dwarven Toughness", "Stonecunning"],
            )
        },
        species_def(
            "Elf",
            Size::Medium,
            30,
            &["Darkvision", "Elven Lineage", "Fey Ancestry", "Keen Senses", "Trance"],
        ),
        species_def("Gnome", Size::Small, 30, &["Darkvision", "Gnomish Cunning", "Gnomish Lineage"]),
        species_def("Goliath", Size::Medium, 35, &["Giant Ancestry", "Large Form", "Powerful Build"]),
        species_def(
            "Halfling",
            Size::Small,
            30,
            &["Brave", "Halfling Nimbleness", "Luck", "Naturally Stealthy"],
        ),
        species_def("Human", Size::Medium, 30, &["Resourceful", "Skillful", "Versatile"]),
        species_def("Orc", Size::Medium, 30, &["Adrenaline Rush", "Darkvision", "Relentless Endurance"]),
        species_def(
            "Tiefling",
            Size::Medium,
            30,
            &["Darkvision", "Fiendish Legacy", "Otherworldly Presence"],
        ),
    ]
}

pub fn classes() -> Vec<ClassDef> {
    vec![
        class_def(
            "Barbarian",
            12,
            Strength,
            [Strength, Constitution],
            (2, &["Animal Handling", "Athletics", "Intimidation", "Nature", "Perception", "Survival"]),
            vec![
                StartingKit::new("A", &["Greataxe", "4 Handaxes", "Explorer's Pack", "15 GP"]),
                StartingKit::new("B", &["75 GP"]),
            ],
        ),
        class_def(
            "Bard",
            8,
            Charisma,
            [Dexterity, Charisma],
            (3, ALL_SKILLS),
            vec![
                StartingKit::new(
                    "A",
                    &["Leather Armor", "2 Daggers", "Musical Instrument", "Entertainer's Pack", "19 GP"],
                ),
                StartingKit::new("B", &["90 GP"]),
            ],
        ),
        class_def(
            "Cleric",
            8,
            Wisdom,
            [Wisdom, Charisma],
            (2, &["History", "Insight", "Medicine", "Persuasion", "Religion"]),
            vec![
                StartingKit::new(
                    "A",
                    &["Chain Shirt", "Shield", "Mace", "Holy Symbol", "Priest's Pack", "7 GP"],
                ),
                StartingKit::new("B", &["110 GP"]),
            ],
        ),
        class_def(
            "Druid",
            8,
            Wisdom,
            [Intelligence, Wisdom],
            (
                2,
                &["Arcana", "Animal Handling", "Insight", "Medicine", "Nature", "Perception", "Religion", "Survival"],
            ),
            vec![
                StartingKit::new(
                    "A",
                    &[
                        "Leather Armor",
                        "Shield",
                        "Sickle",
                        "Druidic Focus",
                        "Explorer's Pack",
                        "Herbalism Kit",
                        "9 GP",
                    ],
                ),
                StartingKit::new("B", &["50 GP"]),
            ],
        ),
        class_def(
            "Fighter",
            10,
            Strength,
            [Strength, Constitution],
            (
                2,
                &[
                    "Acrobatics",
                    "Animal Handling",
                    "Athletics",
                    "History",
                    "Insight",
                    "Intimidation",
                    "Perception",
                    "Persuasion",
                    "Survival",
                ],
            ),
            vec![
                StartingKit::new(
                    "A",
                    &["Chain Mail", "Greatsword", "Flail", "8 Javelins", "Dungeoneer's Pack", "4 GP"],
                ),
                StartingKit::new(
                    "B",
                    &[
                        "Studded Leather Armor",
                        "Scimitar",
                        "Shortsword",
                        "Longbow",
                        "20 Arrows",
                        "Quiver",
                        "Dungeoneer's Pack",
                        "11 GP",
                    ],
                ),
                StartingKit::new("C", &["155 GP"]),
            ],
        ),
        class_def(
            "Monk",
            8,
            Dexterity,
            [Strength, Dexterity],
            (2, &["Acrobatics", "Athletics", "History", "Insight", "Religion", "Stealth"]),
            vec![
                StartingKit::new(
                    "A",
                    &["Spear", "5 Daggers", "Artisan's Tools", "Explorer's Pack", "11 GP"],
                ),
                StartingKit::new("B", &["50 GP"]),
            ],
        ),
        class_def(
            "Paladin",
            10,
            Strength,
            [Wisdom, Charisma],
            (2, &["Athletics", "Insight", "Intimidation", "Medicine", "Persuasion", "Religion"]),
            vec![
                StartingKit::new(
                    "A",
                    &[
                        "Chain Mail",
                        "Shield",
                        "Longsword",
                        "6 Javelins",
                        "Holy Symbol",
                        "Priest's Pack",
                        "9 GP",
                    ],
                ),
                StartingKit::new("B", &["150 GP"]),
            ],
        ),
        class_def(
            "Ranger",
            10,
            Dexterity,
            [Strength, Dexterity],
            (
                3,
                &[
                    "Animal Handling",
                    "Athletics",
                    "Insight",
                    "Investigation",
                    "Nature",
                    "Perception",
                    "Stealth",
                    "Survival",
                ],
            ),
            vec![
                StartingKit::new(
                    "A",
                    &[
                        "Studded Leather Armor",
                        "Scimitar",
                        "Shortsword",
                        "Longbow",
                        "20 Arrows",
                        "Quiver",
                        "Druidic Focus",
                        "Explorer's Pack",
                        "7 GP",
                    ],
                ),
                StartingKit::new("B", &["150 GP"]),
            ],
        ),
        class_def(
            "Rogue",
            8,
            Dexterity,
            [Dexterity, Intelligence],
            (
                4,
                &[
                    "Acrobatics",
                    "Athletics",
                    "Deception",
                    "Insight",
                    "Intimidation",
                    "Investigation",
                    "Perception",
                    "Persuasion",
                    "Sleight of Hand",
                    "Stealth",
                ],
            ),
            vec![
                StartingKit::new(
                    "A",
                    &[
                        "Leather Armor",
                        "2 Daggers",
                        "Shortsword",
                        "Shortbow",
                        "20 Arrows",
                        "Quiver",
                        "Thieves' Tools",
                        "Burglar's Pack",
                        "8 GP",
                    ],
                ),
                StartingKit::new("B", &["100 GP"]),
            ],
        ),
        class_def(
            "Sorcerer",
            6,
            Charisma,
            [Constitution, Charisma],
            (2, &["Arcana", "Deception", "Insight", "Intimidation", "Persuasion", "Religion"]),
            vec![
                StartingKit::new(
                    "A",
                    &["Spear", "2 Daggers", "Arcane Focus", "Dungeoneer's Pack", "28 GP"],
                ),
                StartingKit::new("B", &["50 GP"]),
            ],
        ),
        class_def(
            "Warlock",
            8,
            Charisma,
            [Wisdom, Charisma],
            (
                2,
                &["Arcana", "Deception", "History", "Intimidation", "Investigation", "Nature", "Religion"],
            ),
            vec![
                StartingKit::new(
                    "A",
                    &[
                        "Leather Armor",
                        "Sickle",
                        "2 Daggers",
                        "Arcane Focus",
                        "Book",
                        "Scholar's Pack",
                        "15 GP",
                    ],
                ),
                StartingKit::new("B", &["100 GP"]),
            ],
        ),
        class_def(
            "Wizard",
            6,
            Intelligence,
            [Intelligence, Wisdom],
            (
                2,
                &["Arcana", "History", "Insight", "Investigation", "Medicine", "Nature", "Religion"],
            ),
            vec![
                StartingKit::new(
                    "A",
                    &["2 Daggers", "Arcane Focus", "Robe", "Spellbook", "Scholar's Pack", "5 GP"],
                ),
                StartingKit::new("B", &["55 GP"]),
            ],
        ),
    ]
}

pub fn backgrounds() -> Vec<BackgroundDef> {
    vec![
        background_def(
            "Acolyte",
            [Intelligence, Wisdom, Charisma],
            ["Insight", "Religion"],
            "Magic Initiate (Cleric)",
            &["Calligrapher's Supplies", "Book", "Holy Symbol", "10 Parchment", "Robe", "8 GP"],
        ),
        background_def(
            "Criminal",
            [Dexterity, Constitution, Intelligence],
            ["Sleight of Hand", "Stealth"],
            "Alert",
            &["2 Daggers", "Thieves' Tools", "Crowbar", "2 Pouches", "Traveler's Clothes", "16 GP"],
        ),
        background_def(
            "Farmer",
            [Strength, Constitution, Wisdom],
            ["Animal Handling", "Nature"],
            "Tough",
            &["Sickle", "Carpenter's Tools", "Healer's Kit", "Iron Pot", "Shovel", "Traveler's Clothes", "30 GP"],
        ),
        background_def(
            "Guard",
            [Strength, Intelligence, Wisdom],
            ["Athletics", "Perception"],
            "Alert",
            &[
                "Spear",
                "Light Crossbow",
                "20 Bolts",
                "Gaming Set",
                "Hooded Lantern",
                "Manacles",
                "Quiver",
                "Traveler's Clothes",
                "12 GP",
            ],
        ),
        background_def(
            "Merchant",
            [Constitution, Intelligence, Charisma],
            ["Animal Handling", "Persuasion"],
            "Lucky",
            &["Navigator's Tools", "2 Pouches", "Traveler's Clothes", "22 GP"],
        ),
        background_def(
            "Sage",
            [Constitution, Intelligence, Wisdom],
            ["Arcana", "History"],
            "Magic Initiate (Wizard)",
            &["Quarterstaff", "Calligrapher's Supplies", "Book", "8 Parchment", "Robe", "8 GP"],
        ),
        background_def(
            "Sailor",
            [Strength, Dexterity, Wisdom],
            ["Acrobatics", "Perception"],
            "Tavern Brawler",
            &["Dagger", "Navigator's Tools", "Rope", "Traveler's Clothes", "20 GP"],
        ),
        background_def(
            "Soldier",
            [Strength, Dexterity, Constitution],
            ["Athletics", "Intimidation"],
            "Savage Attacker",
            &[
                "Spear",
                "Shortbow",
                "20 Arrows",
                "Gaming Set",
                "Healer's Kit",
                "Quiver",
                "Traveler's Clothes",
                "14 GP",
            ],
        ),
    ]
}

const ALL_SKILLS: &[&str] = &[
    "Acrobatics",
    "Animal Handling",
    "Arcana",
    "Athletics",
    "Deception",
    "History",
    "Insight",
    "Intimidation",
    "Investigation",
    "Medicine",
    "Nature",
    "Perception",
    "Performance",
    "Persuasion",
    "Religion",
    "Sleight of Hand",
    "Stealth",
    "Survival",
];

fn species_def(name: &str, size: Size, speed: u32, traits: &[&str]) -> SpeciesDef {
    SpeciesDef {
        name: name.to_string(),
        size,
        speed,
        traits: to_strings(traits),
        hit_point_bonus: 0,
    }
}

fn class_def(
    name: &str,
    hit_die: u32,
    primary_ability: Ability,
    saving_throws: [Ability; 2],
    (skill_count, skill_choices): (usize, &[&str]),
    starting_kits: Vec<StartingKit>,
) -> ClassDef {
    ClassDef {
        name: name.to_string(),
        hit_die,
        primary_ability,
        saving_throws: saving_throws.to_vec(),
        skill_choices: to_strings(skill_choices),
        skill_count,
        starting_kits,
    }
}

/// Every background offers its kit or a flat 50 GP
fn background_def(
    name: &str,
    ability_options: [Ability; 3],
    skills: [&str; 2],
    feat: &str,
    kit: &[&str],
) -> BackgroundDef {
    BackgroundDef {
        name: name.to_string(),
        ability_options: ability_options.to_vec(),
        skills: to_strings(&skills),
        feat: feat.to_string(),
        starting_kits: vec![StartingKit::new("A", kit), StartingKit::new("B", &["50 GP"])],
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
