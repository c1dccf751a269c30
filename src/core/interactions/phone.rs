use crate::content::ids;
use crate::core::capability::QuestLog;
use crate::utils::html;

pub fn call_friend() -> String {
    format!(
        "{}{}",
        html::heading("Calling Alex"),
        html::each(
            [
                "Alex picked up on the second ring, as always.",
                "We talked about school, about the people we used to know, about nothing really. It was nice.",
            ],
            html::paragraph
        )
    )
}

pub fn call_mom(mut quests: QuestLog<'_>) -> String {
    let heading = html::heading("Calling Mom");
    if quests.complete(ids::QUEST_001_TASK_003) {
        return format!(
            "{}{}",
            heading,
            html::each(
                [
                    "I told her everything: the article, the land, the barn.",
                    "She was quiet for a long time. Then she asked if the barn had room for her tomatoes.",
                    "I think that was a yes.",
                ],
                html::paragraph
            )
        );
    }
    format!(
        "{}{}",
        heading,
        html::paragraph("Mom asked if I was eating well. I said yes. We both knew it was not entirely true.")
    )
}
