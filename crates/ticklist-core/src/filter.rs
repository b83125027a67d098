use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::task::Task;

/// Completion filter applied after the
/// search term.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Filter {
  #[default]
  All,
  Active,
  Completed
}

impl Filter {
  pub const ALL: [Filter; 3] = [
    Filter::All,
    Filter::Active,
    Filter::Completed
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Completed => "Completed"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Active => !task.is_checked,
      | Self::Completed => task.is_checked
    }
  }
}

impl fmt::Display for Filter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Filter {
  type Err = anyhow::Error;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    Filter::ALL
      .into_iter()
      .find(|filter| {
        filter.as_str() == raw
      })
      .ok_or_else(|| {
        anyhow!("unknown filter: {raw}")
      })
  }
}
