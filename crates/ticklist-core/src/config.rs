use anyhow::{
  Context,
  bail
};
use serde::Deserialize;
use tracing::{
  debug,
  info
};

use crate::storage::KeyValueStore;
use crate::theme::Theme;

pub const DEFAULT_TASKS_KEY: &str =
  "tasks";
pub const DEFAULT_THEME_KEY: &str =
  "theme";

/// Values the store is constructed with.
///
/// `theme` is the theme the store starts
/// in. It comes from the config file and
/// is normally overridden by the value the
/// user last picked, see
/// [`StoreConfig::with_stored_theme`].
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct StoreConfig {
  pub tasks_key: String,
  pub theme_key: String,
  pub theme:     Theme
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
  storage: StorageSection,
  ui:      UiSection
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct StorageSection {
  tasks_key: String,
  theme_key: String
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UiSection {
  default_theme: Theme
}

impl Default for StorageSection {
  fn default() -> Self {
    Self {
      tasks_key: DEFAULT_TASKS_KEY
        .to_string(),
      theme_key: DEFAULT_THEME_KEY
        .to_string()
    }
  }
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      tasks_key: DEFAULT_TASKS_KEY
        .to_string(),
      theme_key: DEFAULT_THEME_KEY
        .to_string(),
      theme:     Theme::default()
    }
  }
}

impl StoreConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let file: ConfigFile =
      toml::from_str(text).context(
        "failed to parse ticklist \
         config"
      )?;

    let tasks_key =
      file.storage.tasks_key.trim();
    let theme_key =
      file.storage.theme_key.trim();
    if tasks_key.is_empty()
      || theme_key.is_empty()
    {
      bail!(
        "storage keys must not be \
         empty"
      );
    }
    if tasks_key == theme_key {
      bail!(
        "tasks and theme must use \
         different storage keys, \
         both are {tasks_key:?}"
      );
    }

    let cfg = Self {
      tasks_key: tasks_key.to_string(),
      theme_key: theme_key.to_string(),
      theme:     file.ui.default_theme
    };
    info!(
      tasks_key = %cfg.tasks_key,
      theme_key = %cfg.theme_key,
      default_theme = cfg.theme.storage_value(),
      "loaded ticklist config"
    );
    Ok(cfg)
  }

  /// Replaces the configured theme with the
  /// one persisted under `theme_key`, when
  /// that value is a known theme.
  pub fn with_stored_theme(
    mut self,
    storage: &dyn KeyValueStore
  ) -> Self {
    let stored = storage
      .get(&self.theme_key)
      .and_then(|raw| {
        Theme::from_storage_value(&raw)
      });

    match stored {
      | Some(theme) => {
        debug!(
          theme = theme.storage_value(),
          "using stored theme"
        );
        self.theme = theme;
      }
      | None => {
        debug!(
          theme =
            self.theme.storage_value(),
          "no stored theme; using \
           configured default"
        );
      }
    }
    self
  }
}

#[cfg(test)]
mod tests {
  use super::StoreConfig;
  use crate::storage::MemoryStorage;
  use crate::theme::Theme;

  #[test]
  fn empty_file_gives_defaults() {
    let cfg = StoreConfig::from_toml_str("")
      .expect("parse empty config");
    assert_eq!(cfg, StoreConfig::default());
    assert_eq!(cfg.tasks_key, "tasks");
    assert_eq!(cfg.theme_key, "theme");
    assert_eq!(cfg.theme, Theme::Dark);
  }

  #[test]
  fn sections_override_defaults() {
    let cfg = StoreConfig::from_toml_str(
      r#"
[storage]
tasks_key = "todo.tasks"

[ui]
default_theme = "light"
"#
    )
    .expect("parse config");
    assert_eq!(cfg.tasks_key, "todo.tasks");
    assert_eq!(cfg.theme_key, "theme");
    assert_eq!(cfg.theme, Theme::Light);
  }

  #[test]
  fn rejects_colliding_or_blank_keys() {
    assert!(
      StoreConfig::from_toml_str(
        "[storage]\ntasks_key = \
         \"x\"\ntheme_key = \"x\"\n"
      )
      .is_err()
    );
    assert!(
      StoreConfig::from_toml_str(
        "[storage]\ntasks_key = \"  \"\n"
      )
      .is_err()
    );
    assert!(
      StoreConfig::from_toml_str(
        "[ui]\ndefault_theme = \"sepia\"\n"
      )
      .is_err()
    );
  }

  #[test]
  fn stored_theme_wins_over_default() {
    let storage = MemoryStorage::new()
      .with_entry("theme", "light");
    let cfg = StoreConfig::default()
      .with_stored_theme(&storage);
    assert_eq!(cfg.theme, Theme::Light);

    let junk = MemoryStorage::new()
      .with_entry("theme", "sepia");
    let cfg = StoreConfig::default()
      .with_stored_theme(&junk);
    assert_eq!(cfg.theme, Theme::Dark);
  }
}
