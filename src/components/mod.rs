//! UI Components
//!
//! TodoMVC views. Each reads model state through the app context and raises
//! view events through the controller.

mod footer;
mod header;
mod todo_editor;
mod todo_item;
mod todo_list;
mod toggle_all;

pub use footer::Footer;
pub use header::Header;
pub use todo_editor::TodoEditor;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use toggle_all::ToggleAll;
