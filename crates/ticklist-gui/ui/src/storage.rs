use anyhow::anyhow;
use ticklist_core::KeyValueStore;

/// `window.localStorage`. When the browser
/// refuses access (private mode, disabled
/// storage) reads come back empty and
/// writes fail.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
  inner: Option<web_sys::Storage>
}

impl BrowserStorage {
  pub fn open() -> Self {
    let inner = web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      });

    if inner.is_none() {
      tracing::warn!(
        "local storage unavailable; \
         changes will not persist"
      );
    }

    Self {
      inner
    }
  }
}

impl KeyValueStore for BrowserStorage {
  fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self
      .inner
      .as_ref()?
      .get_item(key)
      .ok()
      .flatten()
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let storage =
      self.inner.as_ref().ok_or_else(
        || {
          anyhow!(
            "local storage unavailable"
          )
        }
      )?;

    storage
      .set_item(key, value)
      .map_err(|error| {
        anyhow!(
          "local storage rejected \
           {key}: {error:?}"
        )
      })
  }
}
