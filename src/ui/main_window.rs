use fltk::{
    app::{self, Sender},
    button::{Button, ToggleButton},
    enums::{Event, FrameType, Key},
    group::Wizard,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::content::PageId;
use crate::app::messages::Message;

use super::menu::build_menu;
use super::pages::{self, FormWidgets, PageSet};

pub const WIN_W: i32 = 900;
pub const WIN_H: i32 = 660;
pub const MENU_H: i32 = 30;
pub const CONTENT_Y: i32 = 78;
pub const CONTENT_H: i32 = WIN_H - CONTENT_Y;

pub struct MainWidgets {
    pub window: Window,
    pub menu: MenuBar,
    pub nav_buttons: Vec<(PageId, Button)>,
    pub theme_toggles: Vec<ToggleButton>,
    pub stack: Wizard,
    pub pages: PageSet,
}

pub fn build_main_window(sender: &Sender<Message>) -> (MainWidgets, Vec<FormWidgets>) {
    let mut window = Window::new(100, 100, WIN_W, WIN_H, "Gaurav \u{2014} Portfolio");
    window.set_xclass("FolioView");

    let mut menu = MenuBar::new(0, 0, WIN_W, MENU_H, "");
    build_menu(&mut menu, sender);

    // Header: one nav button per page plus the theme toggle.
    let mut nav_buttons = Vec::new();
    let mut x = 12;
    for page in PageId::ALL {
        let mut button = Button::new(x, MENU_H + 8, 96, 32, page.label());
        button.set_frame(FrameType::FlatBox);
        button.emit(*sender, Message::ShowPage(page));
        nav_buttons.push((page, button));
        x += 100;
    }

    let mut theme_toggle = ToggleButton::new(WIN_W - 60, MENU_H + 8, 48, 32, None);
    theme_toggle.set_tooltip("Switch between light and dark themes");
    theme_toggle.emit(*sender, Message::ToggleTheme);

    let mut stack = Wizard::new(0, CONTENT_Y, WIN_W, CONTENT_H, None);
    let (pages, forms) = pages::build_pages(sender);
    stack.end();

    window.end();
    window.make_resizable(false);

    // Watch for the first Tab press without consuming it, so FLTK still
    // moves focus.
    let s = *sender;
    window.handle(move |_, event| {
        if event == Event::KeyDown && app::event_key() == Key::Tab {
            s.send(Message::TabPressed);
        }
        false
    });

    let widgets = MainWidgets {
        window,
        menu,
        nav_buttons,
        theme_toggles: vec![theme_toggle],
        stack,
        pages,
    };
    (widgets, forms)
}
