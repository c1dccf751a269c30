//! Interaction dispatch.
//!
//! Every entity carries an [`Interaction`] variant chosen from its id when
//! the world is materialized. Unknown ids get [`Interaction::Placeholder`].
//! [`dispatch`] hands each variant's handler only the capabilities that
//! variant needs, built from the session for this call alone.

mod help;
mod phone;
mod quest001;
mod status;
mod todo;

use crate::config::PLACEHOLDER_OUTPUT;
use crate::content::ids;
use crate::core::capability::{Calendar, HistoryController, QuestLog, StatusView, TodoView};
use crate::models::{EntityId, EntityStore, Transcript};

/// Objectives of quest 001, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    LearnAboutSelfSufficiency,
    FindLand,
    TellMom,
}

/// What happens when an entity is entered as an exact command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    /// No dedicated handler; renders `"..."`.
    #[default]
    Placeholder,
    Help,
    Clear,
    Status,
    Skip,
    Todo,
    TaskBriefing(Task),
    SelfSufficiencyWebsite,
    LandWebsite,
    CallFriend,
    CallMom,
}

impl Interaction {
    pub fn for_id(id: &EntityId) -> Self {
        match id.as_str() {
            ids::HELP => Self::Help,
            ids::CLEAR => Self::Clear,
            ids::STATUS => Self::Status,
            ids::SKIP => Self::Skip,
            ids::TODO => Self::Todo,
            ids::QUEST_001_TASK_001 => Self::TaskBriefing(Task::LearnAboutSelfSufficiency),
            ids::QUEST_001_TASK_002 => Self::TaskBriefing(Task::FindLand),
            ids::QUEST_001_TASK_003 => Self::TaskBriefing(Task::TellMom),
            ids::SELF_SUFFICIENCY_WEBSITE => Self::SelfSufficiencyWebsite,
            ids::LAND_WEBSITE_001 => Self::LandWebsite,
            ids::FRIEND_001 => Self::CallFriend,
            ids::MOM => Self::CallMom,
            _ => Self::Placeholder,
        }
    }
}

/// The parts of a session an interaction may be granted access to.
pub struct Turn<'a> {
    pub transcript: &'a mut Transcript,
    pub entities: &'a mut EntityStore,
}

/// Run `interaction` and return its rendered output.
pub fn dispatch(interaction: Interaction, turn: Turn<'_>) -> String {
    tracing::debug!(?interaction, "dispatching interaction");
    match interaction {
        Interaction::Placeholder => PLACEHOLDER_OUTPUT.to_string(),
        Interaction::Help => help::help(),
        Interaction::Clear => help::clear(HistoryController::new(turn.transcript)),
        Interaction::Status => match StatusView::load(turn.entities) {
            Ok(view) => status::status(&view),
            Err(err) => placeholder_for(interaction, &err),
        },
        Interaction::Skip => match Calendar::load(turn.entities) {
            Ok(calendar) => status::skip(calendar).unwrap_or_else(|err| placeholder_for(interaction, &err)),
            Err(err) => placeholder_for(interaction, &err),
        },
        Interaction::Todo => todo::todo(&TodoView::new(turn.entities)),
        Interaction::TaskBriefing(task) => todo::briefing(task),
        Interaction::SelfSufficiencyWebsite => {
            quest001::self_sufficiency_website(QuestLog::new(turn.entities))
        }
        Interaction::LandWebsite => quest001::land_website(QuestLog::new(turn.entities)),
        Interaction::CallFriend => phone::call_friend(),
        Interaction::CallMom => phone::call_mom(QuestLog::new(turn.entities)),
    }
}

fn placeholder_for(interaction: Interaction, err: &dyn std::error::Error) -> String {
    tracing::warn!(?interaction, error = %err, "interaction failed, rendering placeholder");
    PLACEHOLDER_OUTPUT.to_string()
}
