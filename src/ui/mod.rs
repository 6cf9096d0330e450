pub mod dialogs;
pub mod main_window;
pub mod menu;
pub mod overlay;
pub mod pages;
pub mod theme;
