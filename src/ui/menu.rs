use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::content::PageId;
use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    menu.add_emit("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, *s, Message::Quit);

    for page in PageId::ALL {
        let entry = format!("Go/{}", page.label());
        menu.add_emit(&entry, Shortcut::None, MenuFlag::Normal, *s, Message::ShowPage(page));
    }

    menu.add_emit(
        "View/Toggle Theme",
        Shortcut::Ctrl | 'd',
        MenuFlag::Normal,
        *s,
        Message::ToggleTheme,
    );

    menu.add_emit(
        "Help/About FolioView",
        Shortcut::None,
        MenuFlag::Normal,
        *s,
        Message::ShowAbout,
    );
}
