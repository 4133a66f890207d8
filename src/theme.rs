use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, Result};
use crate::models::ThemePalette;

const GOGH_THEME_BASE_URL: &str = "https://raw.githubusercontent.com/Gogh-Co/Gogh/master/themes";

/// Fetches a named terminal palette from the Gogh theme collection.
pub struct ThemeService {
    client: Client,
    theme_name: String,
}

impl ThemeService {
    pub fn new(theme_name: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            theme_name: theme_name.into(),
        })
    }

    /// Fetch and parse the palette. Failures degrade to `None`.
    pub async fn fetch_palette(&self) -> Option<ThemePalette> {
        match self.try_fetch().await {
            Ok(palette) => Some(palette),
            Err(err) => {
                tracing::warn!("Theme {} unavailable: {}", self.theme_name, err);
                None
            }
        }
    }

    async fn try_fetch(&self) -> Result<ThemePalette> {
        let url = format!("{}/{}.yml", GOGH_THEME_BASE_URL, self.theme_name);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "theme fetch returned {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        serde_yaml::from_str(&body).map_err(|err| Error::Transport(err.to_string()))
    }
}
