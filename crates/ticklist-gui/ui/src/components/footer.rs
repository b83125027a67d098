use ticklist_core::Filter;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
  pub items_left_label: String,
  pub filter:           Filter,
  pub on_filter:        Callback<Filter>,
  pub on_clear:         Callback<()>
}

#[function_component(Footer)]
pub fn footer(
  props: &FooterProps
) -> Html {
  let on_clear = props.on_clear.clone();

  html! {
      <footer class="flex-row">
          <div class="items-left">
              <span>{ &props.items_left_label }</span>
          </div>
          <div class="filter flex-row">
              {
                  for Filter::ALL.into_iter().map(|filter| {
                      let on_filter = props.on_filter.clone();
                      html! {
                          <label>
                              <input
                                  type="radio"
                                  name="filter"
                                  id={filter.as_str()}
                                  checked={props.filter == filter}
                                  onchange={move |_| on_filter.emit(filter)}
                              />
                              { filter.label() }
                          </label>
                      }
                  })
              }
          </div>
          <button class="clear" onclick={move |_| on_clear.emit(())}>
              { "Clear Completed" }
          </button>
      </footer>
  }
}
