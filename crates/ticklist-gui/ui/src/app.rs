use gloo::console::log;
use ticklist_core::{
  EditRequest,
  Filter,
  ListView,
  Priority,
  State,
  StoreConfig,
  TaskStore,
  Theme
};
use yew::{
  Callback,
  Html,
  classes,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::components::{
  Footer,
  Header,
  TaskList
};
use crate::storage::BrowserStorage;

const CONFIG_TOML: &str =
  include_str!("../assets/ticklist.toml");

#[function_component(App)]
pub fn app() -> Html {
  let store = use_mut_ref(open_store);
  let view = {
    let store = store.clone();
    use_state(move || {
      ListView::build(store.borrow().state())
    })
  };

  let open_dropdown =
    use_state(|| None::<usize>);

  {
    let store = store.clone();
    let view = view.clone();
    let open_dropdown = open_dropdown.clone();
    use_effect_with((), move |_| {
      let id = store.borrow_mut().subscribe(
        Box::new(move |state: &State| {
          view.set(ListView::build(state));
          open_dropdown.set(next_open_dropdown(
            *open_dropdown,
            DropdownEvent::StoreChanged
          ));
        })
      );
      store.borrow_mut().load();

      move || {
        store.borrow_mut().unsubscribe(id);
      }
    });
  }

  {
    let theme = view.theme;
    use_effect_with(theme, |theme| {
      apply_body_theme(*theme);
    });
  }

  let on_add = {
    let store = store.clone();
    Callback::from(move |text: String| {
      let added = store
        .borrow_mut()
        .add(&text, Priority::None);
      ui_debug(
        "add",
        &format!("added={added}")
      );
    })
  };

  let on_toggle = {
    let store = store.clone();
    Callback::from(move |index: usize| {
      store
        .borrow_mut()
        .toggle_checked(index);
    })
  };

  let on_remove = {
    let store = store.clone();
    Callback::from(move |index: usize| {
      store.borrow_mut().remove(index);
    })
  };

  let on_edit = {
    let store = store.clone();
    Callback::from(move |index: usize| {
      let current = store
        .borrow()
        .tasks()
        .get(index)
        .map(|task| task.text.clone());
      let Some(current) = current else {
        tracing::warn!(
          index,
          "edit requested for missing \
           task"
        );
        return;
      };

      let request = EditRequest::from(
        prompt_edit(&current)
      );
      let outcome = store
        .borrow_mut()
        .edit_text(index, request);
      ui_debug(
        "edit",
        &format!("{index}: {outcome:?}")
      );
    })
  };

  let on_priority = {
    let store = store.clone();
    Callback::from(
      move |(index, priority): (
        usize,
        Priority
      )| {
        store
          .borrow_mut()
          .set_priority(index, priority);
      }
    )
  };

  let on_filter = {
    let store = store.clone();
    Callback::from(move |filter: Filter| {
      store.borrow_mut().set_filter(filter);
    })
  };

  let on_search = {
    let store = store.clone();
    Callback::from(move |term: String| {
      store
        .borrow_mut()
        .set_search_term(&term);
    })
  };

  let on_theme = {
    let store = store.clone();
    Callback::from(move |theme: Theme| {
      store.borrow_mut().set_theme(theme);
    })
  };

  let on_toggle_dropdown = {
    let open_dropdown = open_dropdown.clone();
    Callback::from(move |index: usize| {
      open_dropdown.set(next_open_dropdown(
        *open_dropdown,
        DropdownEvent::Toggle(index)
      ));
    })
  };

  let on_clear = {
    let store = store.clone();
    Callback::from(move |_: ()| {
      let removed = store
        .borrow_mut()
        .clear_completed();
      ui_debug(
        "clear-completed",
        &format!("removed={removed}")
      );
    })
  };

  html! {
      <div class={classes!("app", view.theme_class())}>
          <Header
              theme={view.theme}
              search={view.search_term.clone()}
              on_theme={on_theme}
              on_add={on_add}
              on_search={on_search}
          />
          <div class="content">
              <TaskList
                  rows={view.rows.clone()}
                  open_dropdown={*open_dropdown}
                  on_toggle={on_toggle}
                  on_edit={on_edit}
                  on_remove={on_remove}
                  on_priority={on_priority}
                  on_toggle_dropdown={on_toggle_dropdown}
              />
          </div>
          <Footer
              items_left_label={view.items_left_label()}
              filter={view.filter}
              on_filter={on_filter}
              on_clear={on_clear}
          />
      </div>
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
enum DropdownEvent {
  Toggle(usize),
  StoreChanged
}

/// At most one priority dropdown is open,
/// identified by its row's task index. Any
/// store change can shift indices, so it
/// closes whatever was open.
fn next_open_dropdown(
  open: Option<usize>,
  event: DropdownEvent
) -> Option<usize> {
  match event {
    | DropdownEvent::Toggle(index)
      if open == Some(index) =>
    {
      None
    }
    | DropdownEvent::Toggle(index) => {
      Some(index)
    }
    | DropdownEvent::StoreChanged => None
  }
}

fn open_store()
-> TaskStore<BrowserStorage> {
  let storage = BrowserStorage::open();
  let config =
    load_config().with_stored_theme(&storage);
  tracing::info!(
    theme = config.theme.storage_value(),
    "opening task store"
  );
  TaskStore::new(storage, config)
}

fn load_config() -> StoreConfig {
  match StoreConfig::from_toml_str(
    CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(%error, "failed to parse ticklist config; using defaults");
      StoreConfig::default()
    }
  }
}

/// `None` when the user dismissed the
/// prompt.
fn prompt_edit(
  current: &str
) -> Option<String> {
  web_sys::window()?
    .prompt_with_message_and_default(
      "Edit task",
      current
    )
    .ok()
    .flatten()
}

fn apply_body_theme(theme: Theme) {
  let body = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| document.body());

  if let Some(body) = body {
    body.set_class_name(theme.as_class());
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

#[cfg(test)]
mod tests {
  use super::{
    DropdownEvent,
    next_open_dropdown
  };

  #[test]
  fn toggle_opens_one_dropdown_at_a_time() {
    let open = next_open_dropdown(
      None,
      DropdownEvent::Toggle(1)
    );
    assert_eq!(open, Some(1));

    let open = next_open_dropdown(
      open,
      DropdownEvent::Toggle(2)
    );
    assert_eq!(open, Some(2));

    let open = next_open_dropdown(
      open,
      DropdownEvent::Toggle(2)
    );
    assert_eq!(open, None);
  }

  #[test]
  fn store_change_closes_open_dropdown() {
    // [a, b, c] with b's dropdown open,
    // then a is removed: c now sits at
    // index 1 and must not inherit it.
    let open = next_open_dropdown(
      None,
      DropdownEvent::Toggle(1)
    );
    assert_eq!(
      next_open_dropdown(
        open,
        DropdownEvent::StoreChanged
      ),
      None
    );
    assert_eq!(
      next_open_dropdown(
        None,
        DropdownEvent::StoreChanged
      ),
      None
    );
  }
}
