use fltk::{app, prelude::*};

use folio_view::app::content::PageId;
use folio_view::app::messages::Message;
use folio_view::app::prefs::PreferenceStore;
use folio_view::app::state::AppState;
use folio_view::ui::main_window::build_main_window;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let (widgets, forms) = build_main_window(&sender);
    let store = PreferenceStore::open_default();
    let mut state = AppState::new(widgets, forms, store, sender);

    // Focus rings stay hidden until the first Tab press.
    app::set_visible_focus(false);

    let startup_theme = state.theme.current();
    state.apply_theme(startup_theme);
    state.show_page(PageId::Home);
    state.widgets.window.show();

    while fltk_app.wait() {
        if let Some(message) = receiver.recv() {
            state.handle(message);
        }
    }
}
