//! NPCs, their dialogue lines, and the in-progress dialogue session.

use crate::core::geometry::Position;
use crate::quests::{QuestStatus, QuestTracker, RAT_PROBLEM, SLIME_HUNT, SMITHS_SUPPLIES, THE_DEVOURER};
use crate::zones::ZoneId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NpcId {
    Merchant,
    Blacksmith,
    Innkeeper,
    Hunter,
    Hermit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpcDefinition {
    pub name: &'static str,
    pub zone: ZoneId,
    pub position: Position,
    /// Quest offered and collected by this NPC.
    pub quest: Option<&'static str>,
    pub greeting: &'static [&'static str],
    pub quest_offer: &'static [&'static str],
    pub quest_pending: &'static [&'static str],
    pub quest_done: &'static [&'static str],
}

impl NpcId {
    pub fn all() -> [NpcId; 5] {
        [
            NpcId::Merchant,
            NpcId::Blacksmith,
            NpcId::Innkeeper,
            NpcId::Hunter,
            NpcId::Hermit,
        ]
    }

    /// Target id used by `Talk` quest objectives.
    pub fn tag(&self) -> &'static str {
        match self {
            NpcId::Merchant => "merchant",
            NpcId::Blacksmith => "blacksmith",
            NpcId::Innkeeper => "innkeeper",
            NpcId::Hunter => "hunter",
            NpcId::Hermit => "hermit",
        }
    }

    pub fn definition(&self) -> NpcDefinition {
        match self {
            NpcId::Merchant => NpcDefinition {
                name: "Merchant",
                zone: ZoneId::Village,
                position: Position::new(200.0, 200.0),
                quest: Some(SLIME_HUNT),
                greeting: &[
                    "Welcome to my shop, adventurer!",
                    "I have quality weapons and armor.",
                    "What can I do for you today?",
                ],
                quest_offer: &[
                    "I hear slimes are attacking the farms.",
                    "Get rid of a few and I will reward you.",
                ],
                quest_pending: &["The slimes are still out there."],
                quest_done: &["The farms are safe again. Take this sword."],
            },
            NpcId::Blacksmith => NpcDefinition {
                name: "Blacksmith",
                zone: ZoneId::Village,
                position: Position::new(300.0, 250.0),
                quest: Some(SMITHS_SUPPLIES),
                greeting: &[
                    "Iron and fire, that is what makes a good smith!",
                    "Need your blade sharpened?",
                ],
                quest_offer: &[
                    "I am short on supplies.",
                    "Bring me two rat tails and I will make you something.",
                ],
                quest_pending: &["Two rat tails. Not one, two."],
                quest_done: &["Fine tails. Here, this armor should fit."],
            },
            NpcId::Innkeeper => NpcDefinition {
                name: "Innkeeper",
                zone: ZoneId::Village,
                position: Position::new(100.0, 120.0),
                quest: Some(RAT_PROBLEM),
                greeting: &["Rest your feet, traveler."],
                quest_offer: &[
                    "Rats keep raiding my cellar.",
                    "Could you take care of three of them?",
                ],
                quest_pending: &["I still hear scratching downstairs."],
                quest_done: &["Quiet at last! Have a potion on the house."],
            },
            NpcId::Hunter => NpcDefinition {
                name: "Hunter",
                zone: ZoneId::Forest,
                position: Position::new(600.0, 150.0),
                quest: None,
                greeting: &[
                    "Careful in these woods.",
                    "The slimes get bigger the deeper you go.",
                ],
                quest_offer: &[],
                quest_pending: &[],
                quest_done: &[],
            },
            NpcId::Hermit => NpcDefinition {
                name: "Hermit",
                zone: ZoneId::Marsh,
                position: Position::new(150.0, 450.0),
                quest: Some(THE_DEVOURER),
                greeting: &["Few come this deep into the marsh."],
                quest_offer: &[
                    "Korvash the Devourer sleeps in these waters.",
                    "Slay it, and the marsh will reward you.",
                ],
                quest_pending: &["Korvash still lives. I can feel it."],
                quest_done: &["The marsh breathes again. Take this amulet."],
            },
        }
    }

    /// Lines for this conversation, picked from the state of the NPC's quest.
    pub fn lines_for(&self, quests: &QuestTracker) -> Vec<&'static str> {
        let def = self.definition();
        let mut lines = def.greeting.to_vec();
        match def.quest.and_then(|id| quests.status(id)) {
            Some(QuestStatus::Available) => lines.extend_from_slice(def.quest_offer),
            Some(QuestStatus::Active { completed: false }) => {
                lines.extend_from_slice(def.quest_pending)
            }
            Some(QuestStatus::Active { completed: true }) => {
                lines.extend_from_slice(def.quest_done)
            }
            Some(QuestStatus::Completed) | None => {}
        }
        lines
    }
}

/// Nearest of `npcs` standing in `zone` within `range` (inclusive).
/// Ties go to the earlier entry of `npcs`.
pub fn nearest_npc_within(npcs: &[NpcId], zone: ZoneId, pos: &Position, range: f64) -> Option<NpcId> {
    let mut best: Option<(NpcId, f64)> = None;
    for &npc in npcs {
        let def = npc.definition();
        if def.zone != zone {
            continue;
        }
        let distance = def.position.distance_to(pos);
        if distance <= range && best.map_or(true, |(_, d)| distance < d) {
            best = Some((npc, distance));
        }
    }
    best.map(|(npc, _)| npc)
}

/// What advancing a dialogue did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Line(&'static str),
    Finished,
}

/// An open conversation. Dropped when the game leaves Dialogue mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueSession {
    pub npc: NpcId,
    lines: Vec<&'static str>,
    line: usize,
}

impl DialogueSession {
    pub fn start(npc: NpcId, quests: &QuestTracker) -> Self {
        Self {
            npc,
            lines: npc.lines_for(quests),
            line: 0,
        }
    }

    pub fn current_line(&self) -> Option<&'static str> {
        self.lines.get(self.line).copied()
    }

    pub fn line_index(&self) -> usize {
        self.line
    }

    pub fn advance(&mut self) -> Advance {
        if self.line + 1 < self.lines.len() {
            self.line += 1;
            Advance::Line(self.lines[self.line])
        } else {
            Advance::Finished
        }
    }
}
