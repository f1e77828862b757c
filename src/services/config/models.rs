use crate::services::render::DisplayUnit;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_STATE_DB: &str = "GYMCARD_STATE_DB";
pub const ENV_DISPLAY_UNIT: &str = "GYMCARD_DISPLAY_UNIT";
pub const ENV_CARD_PATH: &str = "GYMCARD_CARD_PATH";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// SQLite file holding the last-posted cursor and cached batch.
    pub state_db: PathBuf,
    pub display_unit: DisplayUnit,
    /// Where the rendered SVG card is written.
    pub card_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_db: PathBuf::from("gymcard.db"),
            display_unit: DisplayUnit::Native,
            card_path: PathBuf::from("card.svg"),
        }
    }
}
