use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dialog text used by the teaching flow.
///
/// Templates may use `{pokemon}`, `{move}` and `{old_move}`; unknown
/// placeholders are left as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    pub trying_to_learn: String,
    pub learned: String,
    pub already_knows: String,
    pub moveset_full: String,
    pub which_move: String,
    pub forgot_and_learned: String,
    pub did_not_learn: String,
    pub yes_option: String,
    pub no_option: String,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        LearnerConfig {
            trying_to_learn: "{pokemon} is trying to learn {move}!".to_string(),
            learned: "{pokemon} learned {move}!".to_string(),
            already_knows: "{pokemon} already knows {move}!".to_string(),
            moveset_full: "But {pokemon} can't learn more than 4 moves! \
                           Delete an older move to make room for {move}?"
                .to_string(),
            which_move: "Which move should be forgotten?".to_string(),
            forgot_and_learned: "1, 2 and... Poof! {pokemon} forgot {old_move}! \
                                 And... {pokemon} learned {move}!"
                .to_string(),
            did_not_learn: "{pokemon} did not learn {move}!".to_string(),
            yes_option: "Yes".to_string(),
            no_option: "No".to_string(),
        }
    }
}

impl LearnerConfig {
    /// Load the configuration from a RON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// Parse the configuration from RON text. Missing fields keep their defaults.
    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        Ok(ron::from_str(content)?)
    }
}

/// Fill in the placeholders of a dialog template
pub fn render(template: &str, pokemon: &str, move_title: &str, old_move: Option<&str>) -> String {
    let text = template
        .replace("{pokemon}", pokemon)
        .replace("{move}", move_title);
    match old_move {
        Some(old) => text.replace("{old_move}", old),
        None => text,
    }
}
