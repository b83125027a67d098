use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
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
pub enum Priority {
  High,
  Medium,
  Low,
  #[default]
  None
}

impl Priority {
  /// Dropdown order.
  pub const ALL: [Priority; 4] = [
    Priority::High,
    Priority::Medium,
    Priority::Low,
    Priority::None
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::High => "high",
      | Self::Medium => "medium",
      | Self::Low => "low",
      | Self::None => "none"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::High => "High",
      | Self::Medium => "Medium",
      | Self::Low => "Low",
      | Self::None => "None"
    }
  }

  /// CSS color of the priority flag.
  pub fn color(self) -> &'static str {
    match self {
      | Self::High => "red",
      | Self::Medium => "#faa80c",
      | Self::Low => "blue",
      | Self::None => "grey"
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Priority {
  type Err = anyhow::Error;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    Priority::ALL
      .into_iter()
      .find(|priority| {
        priority.as_str() == raw
      })
      .ok_or_else(|| {
        anyhow!(
          "unknown priority: {raw}"
        )
      })
  }
}

/// A to-do entry. Tasks have no id of
/// their own; the store addresses them
/// by position.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  pub text:       String,
  #[serde(default)]
  pub is_checked: bool,
  #[serde(default)]
  pub priority:   Priority
}

impl Task {
  pub fn new(
    text: impl Into<String>,
    priority: Priority
  ) -> Self {
    Self {
      text: text.into(),
      is_checked: false,
      priority
    }
  }

  pub fn matches_search(
    &self,
    lowered_term: &str
  ) -> bool {
    lowered_term.is_empty()
      || self
        .text
        .to_lowercase()
        .contains(lowered_term)
  }
}
