//! Well-known entity ids.

pub const WORLD: &str = crate::config::ROOT_ENTITY_ID;
pub const HELP: &str = "help";
pub const CLEAR: &str = "clear";
pub const STATUS: &str = "status";
pub const SKIP: &str = "skip";
pub const TODO: &str = "todo";
pub const INTERNET: &str = "internet";
pub const PHONE: &str = "phone";
pub const FRIEND_001: &str = "friend001";
pub const MOM: &str = "mom";
pub const SELF_SUFFICIENCY_WEBSITE: &str = "website-self-sufficiency";
pub const LAND_WEBSITE_001: &str = "website-land001";
pub const QUEST_001_TASK_001: &str = "quest001task001";
pub const QUEST_001_TASK_002: &str = "quest001task002";
pub const QUEST_001_TASK_003: &str = "quest001task003";
