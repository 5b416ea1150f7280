pub mod main_menu;
pub mod trash_menu;

pub use main_menu::MenuAction;
pub use trash_menu::TrashAction;
