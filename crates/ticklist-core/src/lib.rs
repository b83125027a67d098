pub mod config;
pub mod filter;
pub mod storage;
pub mod store;
pub mod task;
pub mod theme;
pub mod view;

pub use config::StoreConfig;
pub use filter::Filter;
pub use storage::{
  KeyValueStore,
  MemoryStorage
};
#[cfg(feature = "fs")]
pub use storage::DirStorage;
pub use store::{
  EditOutcome,
  EditRequest,
  State,
  SubscriptionId,
  TaskStore
};
pub use task::{
  Priority,
  Task
};
pub use theme::Theme;
pub use view::{
  ListView,
  RowView
};
