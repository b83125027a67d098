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

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:               Vec<RowView>,
  pub open_dropdown:      Option<usize>,
  pub on_toggle:          Callback<usize>,
  pub on_edit:            Callback<usize>,
  pub on_remove:          Callback<usize>,
  pub on_priority:
    Callback<(usize, Priority)>,
  pub on_toggle_dropdown: Callback<usize>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <ul>
          {
              for props.rows.iter().cloned().map(|row| {
                  let index = row.index;
                  html! {
                      <TaskListRow
                          key={index}
                          row={row}
                          dropdown_open={props.open_dropdown == Some(index)}
                          on_toggle={props.on_toggle.clone()}
                          on_edit={props.on_edit.clone()}
                          on_remove={props.on_remove.clone()}
                          on_priority={props.on_priority.clone()}
                          on_toggle_dropdown={props.on_toggle_dropdown.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
