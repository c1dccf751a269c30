use serde_json::json;

use super::ids;
use crate::models::{EntityKind, EntityStore, SerializedEntity};

/// Every entity record of the diary world, attached as at the start of the game.
pub fn catalogue() -> Vec<SerializedEntity> {
    vec![
        SerializedEntity::new(ids::WORLD, EntityKind::Misc, "", "the world around me")
            .with_children([ids::HELP, ids::STATUS, ids::TODO, ids::INTERNET, ids::PHONE]),
        // Terminal
        SerializedEntity::new(
            ids::HELP,
            EntityKind::Cli,
            "help",
            "if I forget the sense of direction, this comes in handy",
        )
        .with_children([ids::CLEAR]),
        SerializedEntity::new(
            ids::CLEAR,
            EntityKind::Cli,
            "clear",
            "tears out the pages I have written so far",
        ),
        SerializedEntity::new(
            ids::STATUS,
            EntityKind::Cli,
            "status",
            "lets me know what is going on in the world",
        )
        .with_children([ids::SKIP])
        .with_meta(status_meta()),
        SerializedEntity::new(ids::SKIP, EntityKind::Cli, "skip", "lets the rest of the day go by"),
        // Quest log
        SerializedEntity::new(ids::TODO, EntityKind::Misc, "todo", "my todo list")
            .with_children([ids::QUEST_001_TASK_001]),
        SerializedEntity::new(
            ids::QUEST_001_TASK_001,
            EntityKind::Misc,
            "learn",
            "Learn about self-sufficiency",
        ),
        SerializedEntity::new(
            ids::QUEST_001_TASK_002,
            EntityKind::Misc,
            "land",
            "Find a piece of land I could afford",
        ),
        SerializedEntity::new(
            ids::QUEST_001_TASK_003,
            EntityKind::Misc,
            "mom",
            "Tell mom about the plan",
        ),
        // Internet
        SerializedEntity::new(
            ids::INTERNET,
            EntityKind::Misc,
            "internet",
            "this is how I browse the internet",
        )
        .with_children([ids::SELF_SUFFICIENCY_WEBSITE]),
        SerializedEntity::new(
            ids::SELF_SUFFICIENCY_WEBSITE,
            EntityKind::Misc,
            "self-sufficiency",
            "website",
        ),
        SerializedEntity::new(
            ids::LAND_WEBSITE_001,
            EntityKind::Misc,
            "land",
            "website with plots for sale",
        ),
        // Phone
        SerializedEntity::new(
            ids::PHONE,
            EntityKind::Misc,
            "phone",
            "something I use when need to contact somebody",
        )
        .with_children([ids::FRIEND_001, ids::MOM]),
        SerializedEntity::new(ids::FRIEND_001, EntityKind::Misc, "alex", "an old friend from school"),
        SerializedEntity::new(ids::MOM, EntityKind::Misc, "mom", "always picks up"),
    ]
}

/// The catalogue keyed by id.
pub fn starting_world() -> EntityStore {
    catalogue()
        .into_iter()
        .map(|record| (record.id.clone(), record))
        .collect()
}

fn status_meta() -> serde_json::Value {
    json!({
        "date": {
            "day": 1,
            "month": 1,
            "year": 2020,
            "dow": "Monday",
            "time": { "hours": 9, "minutes": 23, "seconds": 55 }
        },
        "finances": {
            "occupation": { "title": "clerk", "salary": 2000 },
            "accounts": [
                { "type": "checking", "name": "JP Cookie", "amount": 1234 }
            ],
            "expenses": [
                { "type": "housing", "amount": 1000 },
                { "type": "groceries", "amount": 300 },
                { "type": "car", "amount": 300 }
            ]
        },
        "weather": {
            "season": "winter",
            "temperature": { "degrees": -10, "type": "celsius" }
        },
        "location": {
            "continent": "Disturbium",
            "country": "Disturbistan",
            "city": "Disturbipolis"
        },
        "politics": { "spectrum": "liberal" },
        "economics": { "inflation": 7, "sentiment": "cold" },
        "personal": { "mood": "hopeful", "energy": 79 },
        "description": "I feel like I'm on track to making the self-sufficient life-style possible"
    })
}
