use serde::Serialize;

use super::non_negative;

pub const DEFAULT_CONDITION_ID: u32 = 0;

/// One entry of the `weather` array: condition code, group, text and icon code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConditionItem {
    id: u32,
    main: String,
    description: String,
    icon: String,
}

impl ConditionItem {
    pub fn new(
        id: i64,
        main: Option<String>,
        description: Option<String>,
        icon: Option<String>,
    ) -> Self {
        Self {
            id: non_negative("condition_id", id, DEFAULT_CONDITION_ID),
            main: main.unwrap_or_default(),
            description: description.unwrap_or_default(),
            icon: icon.unwrap_or_default(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn main(&self) -> &str {
        &self.main
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }
}
