use ticklist_core::{
  Priority,
  RowView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::PriorityDropdown;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:                RowView,
  pub dropdown_open:      bool,
  pub on_toggle:          Callback<usize>,
  pub on_edit:            Callback<usize>,
  pub on_remove:          Callback<usize>,
  pub on_priority:
    Callback<(usize, Priority)>,
  pub on_toggle_dropdown: Callback<usize>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let index = props.row.index;
  let on_toggle =
    props.on_toggle.clone();
  let on_edit = props.on_edit.clone();
  let on_remove =
    props.on_remove.clone();
  let on_select = {
    let on_priority =
      props.on_priority.clone();
    Callback::from(
      move |priority: Priority| {
        on_priority.emit((index, priority));
      }
    )
  };

  let on_toggle_open = {
    let on_toggle_dropdown =
      props.on_toggle_dropdown.clone();
    Callback::from(move |_: ()| {
      on_toggle_dropdown.emit(index);
    })
  };

  let checkmark_style = format!(
    "background-color: {}",
    props.row.priority_color()
  );

  html! {
      <li class="flex-row">
          <label class="list-item">
              <input
                  type="checkbox"
                  checked={props.row.checked}
                  onchange={move |_| on_toggle.emit(index)}
              />
              <span class="checkmark" style={checkmark_style}></span>
              <span class="text">{ &props.row.text }</span>
          </label>
          <div class="tooltip">
              <button class="edit" onclick={move |_| on_edit.emit(index)}>
                  <span class="tooltip-text">{ "Edit task" }</span>
                  <span class="img">{ "✎" }</span>
              </button>
          </div>
          <span class="remove" onclick={move |_| on_remove.emit(index)}></span>
          <PriorityDropdown
              selected={props.row.priority}
              open={props.dropdown_open}
              on_toggle_open={on_toggle_open}
              on_select={on_select}
          />
      </li>
  }
}
