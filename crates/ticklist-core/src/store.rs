//! The task list state container.
//!
//! Tasks are addressed by their position in
//! the list. Every index-based operation on
//! an index past the end is a no-op: nothing
//! is written and nobody is notified.
//!
//! Each successful task mutation writes the
//! whole list under the configured key and
//! then notifies every subscriber once.

use std::fmt;

use tracing::{
  debug,
  error,
  info
};

use crate::config::StoreConfig;
use crate::filter::Filter;
use crate::storage::{
  self,
  KeyValueStore
};
use crate::task::{
  Priority,
  Task
};
use crate::theme::Theme;

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct State {
  pub tasks:       Vec<Task>,
  pub filter:      Filter,
  pub search_term: String,
  pub theme:       Theme
}

impl State {
  fn new(theme: Theme) -> Self {
    Self {
      tasks: Vec::new(),
      filter: Filter::default(),
      search_term: String::new(),
      theme
    }
  }

  /// Unchecked tasks across the whole list,
  /// ignoring filter and search.
  pub fn items_left(&self) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| !task.is_checked)
      .count()
  }
}

/// What the caller wants done with a task's
/// text. A dismissed edit prompt is
/// `Cancel`; an accepted one is `Replace`,
/// even when the answer is empty.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum EditRequest {
  Cancel,
  Replace(String)
}

impl From<Option<String>>
  for EditRequest
{
  fn from(answer: Option<String>) -> Self {
    match answer {
      | Some(text) => Self::Replace(text),
      | None => Self::Cancel
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EditOutcome {
  Applied,
  Cancelled,
  /// Replacement text was blank.
  Rejected,
  OutOfRange
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn FnMut(&State)>;

pub struct TaskStore<S> {
  storage:           S,
  config:            StoreConfig,
  state:             State,
  listeners:
    Vec<(SubscriptionId, Listener)>,
  next_subscription: u64
}

impl<S> fmt::Debug for TaskStore<S>
where
  S: fmt::Debug
{
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("TaskStore")
      .field("storage", &self.storage)
      .field("config", &self.config)
      .field("state", &self.state)
      .field(
        "listeners",
        &self.listeners.len()
      )
      .finish()
  }
}

impl<S: KeyValueStore> TaskStore<S> {
  /// Builds an empty store. Call
  /// [`TaskStore::load`] to read persisted
  /// tasks.
  pub fn new(
    storage: S,
    config: StoreConfig
  ) -> Self {
    let state = State::new(config.theme);
    Self {
      storage,
      config,
      state,
      listeners: Vec::new(),
      next_subscription: 0
    }
  }

  pub fn state(&self) -> &State {
    &self.state
  }

  pub fn tasks(&self) -> &[Task] {
    &self.state.tasks
  }

  pub fn len(&self) -> usize {
    self.state.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.state.tasks.is_empty()
  }

  pub fn items_left(&self) -> usize {
    self.state.items_left()
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  pub fn subscribe(
    &mut self,
    listener: Listener
  ) -> SubscriptionId {
    let id =
      SubscriptionId(self.next_subscription);
    self.next_subscription += 1;
    self.listeners.push((id, listener));
    debug!(
      ?id,
      listeners = self.listeners.len(),
      "subscribed"
    );
    id
  }

  pub fn unsubscribe(
    &mut self,
    id: SubscriptionId
  ) -> bool {
    let before = self.listeners.len();
    self
      .listeners
      .retain(|(entry, _)| *entry != id);
    before != self.listeners.len()
  }

  #[tracing::instrument(skip(self))]
  pub fn load(&mut self) {
    self.state.tasks = storage::load_tasks(
      &self.storage,
      &self.config.tasks_key
    );
    info!(
      count = self.state.tasks.len(),
      "loaded tasks"
    );
    self.notify();
  }

  /// Appends an unchecked task. Blank text
  /// is ignored. Returns whether a task was
  /// added.
  #[tracing::instrument(skip(self, text))]
  pub fn add(
    &mut self,
    text: &str,
    priority: Priority
  ) -> bool {
    let text = text.trim();
    if text.is_empty() {
      debug!("ignoring blank task");
      return false;
    }

    self
      .state
      .tasks
      .push(Task::new(text, priority));
    debug!(
      index = self.state.tasks.len() - 1,
      "added task"
    );
    self.commit();
    true
  }

  #[tracing::instrument(skip(self))]
  pub fn remove(
    &mut self,
    index: usize
  ) -> bool {
    if index >= self.state.tasks.len() {
      debug!("remove out of range");
      return false;
    }

    self.state.tasks.remove(index);
    self.commit();
    true
  }

  /// Replaces the text of the task at
  /// `index`. The replacement is stored
  /// trimmed; one that is blank after
  /// trimming is rejected.
  #[tracing::instrument(skip(self, request))]
  pub fn edit_text(
    &mut self,
    index: usize,
    request: EditRequest
  ) -> EditOutcome {
    let Some(task) =
      self.state.tasks.get_mut(index)
    else {
      debug!("edit out of range");
      return EditOutcome::OutOfRange;
    };

    let text = match request {
      | EditRequest::Cancel => {
        return EditOutcome::Cancelled;
      }
      | EditRequest::Replace(text) => text
    };
    let text = text.trim();
    if text.is_empty() {
      debug!("rejecting blank edit");
      return EditOutcome::Rejected;
    }

    task.text = text.to_string();
    self.commit();
    EditOutcome::Applied
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_checked(
    &mut self,
    index: usize
  ) -> bool {
    let Some(task) =
      self.state.tasks.get_mut(index)
    else {
      debug!("toggle out of range");
      return false;
    };

    task.is_checked = !task.is_checked;
    self.commit();
    true
  }

  #[tracing::instrument(skip(self))]
  pub fn set_priority(
    &mut self,
    index: usize,
    priority: Priority
  ) -> bool {
    let Some(task) =
      self.state.tasks.get_mut(index)
    else {
      debug!(
        "set priority out of range"
      );
      return false;
    };

    task.priority = priority;
    self.commit();
    true
  }

  /// Drops every checked task, keeping the
  /// order of the rest. Returns how many
  /// were removed.
  #[tracing::instrument(skip(self))]
  pub fn clear_completed(
    &mut self
  ) -> usize {
    let before = self.state.tasks.len();
    self
      .state
      .tasks
      .retain(|task| !task.is_checked);
    let removed =
      before - self.state.tasks.len();
    debug!(removed, "cleared completed");
    self.commit();
    removed
  }

  pub fn set_filter(
    &mut self,
    filter: Filter
  ) {
    debug!(%filter, "set filter");
    self.state.filter = filter;
    self.notify();
  }

  pub fn set_search_term(
    &mut self,
    term: &str
  ) {
    debug!(term, "set search term");
    self.state.search_term =
      term.to_string();
    self.notify();
  }

  #[tracing::instrument(skip(self))]
  pub fn set_theme(
    &mut self,
    theme: Theme
  ) {
    self.state.theme = theme;
    if let Err(error) = self.storage.set(
      &self.config.theme_key,
      theme.storage_value()
    ) {
      error!(%error, "failed to persist theme");
    }
    self.notify();
  }

  fn commit(&mut self) {
    self.persist();
    self.notify();
  }

  fn persist(&mut self) {
    if let Err(error) = storage::save_tasks(
      &mut self.storage,
      &self.config.tasks_key,
      &self.state.tasks
    ) {
      error!(%error, "failed to persist tasks");
    }
  }

  fn notify(&mut self) {
    let state = &self.state;
    for (_, listener) in
      self.listeners.iter_mut()
    {
      listener(state);
    }
  }
}
