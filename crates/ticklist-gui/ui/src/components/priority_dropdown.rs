use ticklist_core::Priority;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PriorityDropdownProps {
  pub selected:       Priority,
  pub open:           bool,
  pub on_toggle_open: Callback<()>,
  pub on_select:      Callback<Priority>
}

/// Flag button that opens a list of the
/// four priorities. Whether it is open is
/// owned by the app, which closes it on
/// every store change.
#[function_component(PriorityDropdown)]
pub fn priority_dropdown(
  props: &PriorityDropdownProps
) -> Html {
  let on_toggle_open = {
    let on_toggle_open =
      props.on_toggle_open.clone();
    move |e: MouseEvent| {
      e.stop_propagation();
      on_toggle_open.emit(());
    }
  };

  html! {
      <div class="custom-dropdown">
          <div class="selected-priority" onclick={on_toggle_open}>
              { priority_icon(props.selected) }
              { format!(" {}", props.selected.label()) }
          </div>
          <div class={classes!("dropdown-options", (!props.open).then_some("hidden"))}>
              {
                  for Priority::ALL.into_iter().map(|priority| {
                      let on_select = props.on_select.clone();
                      html! {
                          <div
                              class="dropdown-option"
                              data-value={priority.as_str()}
                              onclick={move |e: MouseEvent| {
                                  e.stop_propagation();
                                  on_select.emit(priority);
                              }}
                          >
                              { priority_icon(priority) }
                              { format!(" {}", priority.label()) }
                          </div>
                      }
                  })
              }
          </div>
      </div>
  }
}

fn priority_icon(
  priority: Priority
) -> Html {
  html! {
      <svg xmlns="http://www.w3.org/2000/svg" height="24px" viewBox="0 -960 960 960" width="24px">
          <path
              d="M220-100v-760h40v80h550.77l-72.31 180 72.31 180H260v320h-40Z"
              fill={priority.color()}
          />
      </svg>
  }
}
