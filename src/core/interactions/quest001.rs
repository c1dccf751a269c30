//! Quest 001: from reading about self-sufficiency to telling mom.

use crate::content::ids;
use crate::core::capability::QuestLog;
use crate::utils::html;

pub fn self_sufficiency_website(mut quests: QuestLog<'_>) -> String {
    let mut out = format!(
        "{}{}{}",
        html::heading("Self-sufficiency: Where To Start"),
        html::each(
            [
                "Self-sufficiency means producing what you need instead of buying it: food, water, heat, shelter.",
                "Nobody gets there in one step. Most people start small, with a vegetable patch and a few chickens, and grow from there.",
                "Whatever the size of the dream, it needs ground to stand on.",
            ],
            html::paragraph
        ),
        html::list(
            "The first steps:",
            [
                "find a piece of land",
                "learn to grow food",
                "cut the monthly expenses",
            ]
        )
    );

    if quests.complete(ids::QUEST_001_TASK_001) {
        quests.open(ids::QUEST_001_TASK_002);
        quests.unlock(ids::INTERNET, ids::LAND_WEBSITE_001);
        out.push_str(&html::paragraph(
            "The article linked to a website with land for sale. I bookmarked it and added finding land to my todo list.",
        ));
    }
    out
}

pub fn land_website(mut quests: QuestLog<'_>) -> String {
    let mut out = format!(
        "{}{}",
        html::heading("Plots For Sale"),
        html::list(
            "Listings near Disturbipolis:",
            [
                "2 acres of pasture with a well, $38,000",
                "5 acres of woodland, no road access, $21,500",
                "1 acre with a collapsed barn, $12,000",
            ]
        )
    );

    if quests.complete(ids::QUEST_001_TASK_002) {
        quests.open(ids::QUEST_001_TASK_003);
        out.push_str(&html::paragraph(
            "The acre with the barn is almost within reach. Before I call anybody about it, I should tell mom.",
        ));
    } else {
        out.push_str(&html::paragraph("Still nothing I could afford."));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::starting_world;
    use crate::models::EntityId;

    fn children(store: &crate::models::EntityStore, id: &str) -> Vec<EntityId> {
        store[&EntityId::from(id)].entities.clone()
    }

    #[test]
    fn test_website_advances_quest_once() {
        let mut store = starting_world();
        let first = self_sufficiency_website(QuestLog::new(&mut store));
        assert!(first.contains("bookmarked"));
        assert_eq!(
            children(&store, ids::TODO),
            vec![EntityId::from(ids::QUEST_001_TASK_002)]
        );
        assert!(children(&store, ids::INTERNET).contains(&EntityId::from(ids::LAND_WEBSITE_001)));

        let again = self_sufficiency_website(QuestLog::new(&mut store));
        assert!(!again.contains("bookmarked"));
        assert_eq!(children(&store, ids::INTERNET).len(), 2);
    }

    #[test]
    fn test_land_website_before_quest() {
        let mut store = starting_world();
        let out = land_website(QuestLog::new(&mut store));
        assert!(out.contains("Still nothing I could afford."));
        assert_eq!(
            children(&store, ids::TODO),
            vec![EntityId::from(ids::QUEST_001_TASK_001)]
        );
    }

    #[test]
    fn test_land_website_opens_task_three() {
        let mut store = starting_world();
        self_sufficiency_website(QuestLog::new(&mut store));
        let out = land_website(QuestLog::new(&mut store));
        assert!(out.contains("I should tell mom"));
        assert_eq!(
            children(&store, ids::TODO),
            vec![EntityId::from(ids::QUEST_001_TASK_003)]
        );
    }
}
