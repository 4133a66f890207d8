use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named terminal palette as published in the Gogh theme collection.
/// The numbered `color_NN` entries land in `colors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemePalette {
    pub name: String,
    pub background: String,
    pub foreground: String,
    pub cursor: String,
    #[serde(flatten)]
    pub colors: BTreeMap<String, String>,
}
