use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  Light,
  #[default]
  Dark
}

impl Theme {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  pub fn from_storage_value(
    raw: &str
  ) -> Option<Self> {
    match raw.trim() {
      | "light" => Some(Self::Light),
      | "dark" => Some(Self::Dark),
      | _ => None
    }
  }

  /// The theme switch is a checkbox that
  /// reads "light" when checked.
  pub fn from_toggle(
    checked: bool
  ) -> Self {
    if checked {
      Self::Light
    } else {
      Self::Dark
    }
  }

  pub fn is_light(self) -> bool {
    self == Self::Light
  }
}

#[cfg(test)]
mod tests {
  use super::Theme;

  #[test]
  fn storage_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark]
    {
      assert_eq!(
        Theme::from_storage_value(
          theme.storage_value()
        ),
        Some(theme)
      );
    }
    assert_eq!(
      Theme::from_storage_value("night"),
      None
    );
  }

  #[test]
  fn toggle_maps_checked_to_light() {
    assert_eq!(
      Theme::from_toggle(true),
      Theme::Light
    );
    assert_eq!(
      Theme::from_toggle(false),
      Theme::Dark
    );
    assert_eq!(
      Theme::Dark.next(),
      Theme::Light
    );
  }
}
