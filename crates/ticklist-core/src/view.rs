use crate::filter::Filter;
use crate::store::State;
use crate::task::Priority;
use crate::theme::Theme;

/// One visible row. `index` is the task's
/// position in the full list and is what
/// row interactions send back to the store.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct RowView {
  pub index:    usize,
  pub text:     String,
  pub checked:  bool,
  pub priority: Priority
}

impl RowView {
  pub fn priority_label(
    &self
  ) -> &'static str {
    self.priority.label()
  }

  pub fn priority_color(
    &self
  ) -> &'static str {
    self.priority.color()
  }
}

/// Everything a frontend needs to draw the
/// list, rebuilt from scratch on each
/// store notification.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ListView {
  pub rows:        Vec<RowView>,
  pub items_left:  usize,
  pub filter:      Filter,
  pub search_term: String,
  pub theme:       Theme
}

impl ListView {
  pub fn build(state: &State) -> Self {
    let term =
      state.search_term.to_lowercase();

    let rows = state
      .tasks
      .iter()
      .enumerate()
      .filter(|(_, task)| {
        task.matches_search(&term)
      })
      .filter(|(_, task)| {
        state.filter.matches(task)
      })
      .map(|(index, task)| {
        RowView {
          index,
          text: task.text.clone(),
          checked: task.is_checked,
          priority: task.priority
        }
      })
      .collect();

    Self {
      rows,
      items_left: state.items_left(),
      filter: state.filter,
      search_term: state
        .search_term
        .clone(),
      theme: state.theme
    }
  }

  pub fn theme_class(
    &self
  ) -> &'static str {
    self.theme.as_class()
  }

  pub fn items_left_label(
    &self
  ) -> String {
    match self.items_left {
      | 1 => "1 item left".to_string(),
      | n => format!("{n} items left")
    }
  }

  pub fn visible_texts(
    &self
  ) -> Vec<&str> {
    self
      .rows
      .iter()
      .map(|row| row.text.as_str())
      .collect()
  }
}
