use ticklist_core::Theme;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub theme:     Theme,
  pub search:    String,
  pub on_theme:  Callback<Theme>,
  pub on_add:    Callback<String>,
  pub on_search: Callback<String>
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  let draft = use_state(String::new);

  let submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    Callback::from(move |_: ()| {
      let text = draft.trim();
      if text.is_empty() {
        return;
      }
      on_add.emit(text.to_string());
      draft.set(String::new());
    })
  };

  let on_draft_input = {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft.set(input.value());
    })
  };

  let on_draft_key = {
    let submit = submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          submit.emit(());
        }
      }
    )
  };

  let on_theme_change = {
    let on_theme = props.on_theme.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_theme.emit(Theme::from_toggle(
        input.checked()
      ));
    })
  };

  let on_search_input = {
    let on_search =
      props.on_search.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_search.emit(input.value());
    })
  };

  html! {
      <header>
          <div class="flex-row">
              <h1>{ "TODO" }</h1>
              <label class="theme-switch">
                  <input
                      id="theme"
                      type="checkbox"
                      checked={props.theme.is_light()}
                      onchange={on_theme_change}
                  />
                  <span class="slider"></span>
              </label>
          </div>
          <div class="new-item flex-row">
              <button class="add-new-item" onclick={move |_| submit.emit(())}></button>
              <input
                  id="addItem"
                  type="text"
                  placeholder="Create a new todo..."
                  value={(*draft).clone()}
                  oninput={on_draft_input}
                  onkeypress={on_draft_key}
              />
          </div>
          <input
              id="search"
              type="search"
              placeholder="Search tasks..."
              value={props.search.clone()}
              oninput={on_search_input}
          />
      </header>
  }
}
