use super::types::{ActionType, Objective, Quest, Reward};
use crate::items::ItemId;

pub const SLIME_HUNT: &str = "slime_hunt";
pub const RAT_PROBLEM: &str = "rat_problem";
pub const SMITHS_SUPPLIES: &str = "smiths_supplies";
pub const THE_DEVOURER: &str = "the_devourer";

/// Quests offered at the start of a new game.
pub fn starting_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            SLIME_HUNT,
            "Slime Hunt",
            "Slimes are ruining the crops. Kill 5 slimes.",
            vec![Objective::new(ActionType::Kill, "slime", 5)],
            Reward {
                experience: 100,
                gold: 50,
                items: vec![ItemId::SmallSword],
            },
        ),
        Quest::new(
            RAT_PROBLEM,
            "Rat Problem",
            "Rats keep stealing our food. Get rid of 3 rats.",
            vec![Objective::new(ActionType::Kill, "rat", 3)],
            Reward {
                experience: 50,
                gold: 25,
                items: vec![ItemId::HealthPotion],
            },
        ),
        Quest::new(
            SMITHS_SUPPLIES,
            "Smith's Supplies",
            "Bring 2 rat tails and talk to the blacksmith.",
            vec![
                Objective::new(ActionType::Collect, ItemId::RatTail.tag(), 2),
                Objective::new(ActionType::Talk, "blacksmith", 1),
            ],
            Reward {
                experience: 80,
                gold: 40,
                items: vec![ItemId::LeatherArmor],
            },
        ),
        Quest::new(
            THE_DEVOURER,
            "The Devourer",
            "Korvash haunts the marsh. End it.",
            vec![Objective::new(ActionType::Kill, "korvash", 1)],
            Reward {
                experience: 500,
                gold: 200,
                items: vec![ItemId::MarshAmulet],
            },
        ),
    ]
}
