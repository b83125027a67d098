mod footer;
mod header;
mod priority_dropdown;
mod task_list;
mod task_list_row;

pub use footer::Footer;
pub use header::Header;
pub use priority_dropdown::PriorityDropdown;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
