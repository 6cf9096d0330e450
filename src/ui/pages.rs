use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Event, Font, Key},
    frame::Frame,
    group::Group,
    input::{Input, MultilineInput},
    misc::HelpView,
    prelude::*,
};

use crate::app::content::{self, PageId};
use crate::app::form::FormId;
use crate::app::markdown::{render_markdown, wrap_html_for_helpview};
use crate::app::messages::Message;

use super::main_window::{CONTENT_H, CONTENT_Y, WIN_W};

/// One demo form's widgets. The status frame is this form's own; nothing
/// else writes to it.
pub struct FormWidgets {
    pub id: FormId,
    pub name: Input,
    pub email: Input,
    pub message: MultilineInput,
    pub status: Frame,
}

/// The stacked page groups shown one at a time.
pub struct PageSet {
    pub home: Group,
    pub projects: Group,
    pub blog: Group,
    pub contact: Group,
}

impl PageSet {
    pub fn group_for(&self, page: PageId) -> &Group {
        match page {
            PageId::Home => &self.home,
            PageId::Projects => &self.projects,
            PageId::Blog => &self.blog,
            PageId::Contact => &self.contact,
        }
    }
}

/// Build all four page groups. Must be called while the stack container is
/// the current group.
pub fn build_pages(sender: &Sender<Message>) -> (PageSet, Vec<FormWidgets>) {
    let home = build_home();
    let projects = build_projects(sender);
    let blog = build_blog(sender);
    let (contact, form) = build_contact(sender);

    let pages = PageSet {
        home,
        projects,
        blog,
        contact,
    };
    (pages, vec![form])
}

fn page_group() -> Group {
    Group::new(0, CONTENT_Y, WIN_W, CONTENT_H, None)
}

/// Buttons fire on Space out of the box; overlay sources must also fire on
/// Enter while focused.
fn activate_on_enter(button: &mut Button) {
    button.handle(|b, event| {
        if event == Event::KeyDown && app::event_key() == Key::Enter {
            b.do_callback();
            true
        } else {
            false
        }
    });
}

fn heading(y: i32, text: &'static str) -> Frame {
    let mut frame = Frame::new(24, y, WIN_W - 48, 28, text);
    frame.set_label_size(18);
    frame.set_label_font(Font::HelveticaBold);
    frame.set_align(Align::Left | Align::Inside);
    frame
}

fn build_home() -> Group {
    let group = page_group();

    let mut intro = HelpView::new(24, CONTENT_Y + 16, WIN_W - 48, CONTENT_H - 32, None);
    intro.set_value(&wrap_html_for_helpview(&render_markdown(
        content::HOME_INTRO_MD,
    )));

    group.end();
    group
}

fn build_projects(sender: &Sender<Message>) -> Group {
    let group = page_group();

    heading(CONTENT_Y + 16, "Gallery");

    // Gallery tiles, three to a row. Buttons activate on click and on
    // Enter/Space while focused.
    for (index, tile) in content::GALLERY_TILES.iter().enumerate() {
        let col = (index % 3) as i32;
        let row = (index / 3) as i32;
        let mut button = Button::new(24 + col * 288, CONTENT_Y + 54 + row * 96, 276, 84, tile.title);
        button.set_tooltip("Open preview");
        button.set_align(Align::Center | Align::Inside | Align::Wrap);
        button.emit(*sender, Message::OpenLightbox(index));
        activate_on_enter(&mut button);
    }

    heading(CONTENT_Y + 262, "Projects");

    for (index, project) in content::PROJECTS.iter().enumerate() {
        let y = CONTENT_Y + 298 + (index as i32) * 64;

        let mut card = Frame::new(24, y, 664, 56, None);
        card.set_label(&format!("{}\n{}", project.name, project.blurb));
        card.set_align(Align::Left | Align::Inside | Align::Wrap);

        let mut visit = Button::new(712, y + 10, 164, 36, "Visit \u{2197}");
        visit.set_tooltip(project.url);
        visit.emit(*sender, Message::OpenProjectLink(index));
    }

    group.end();
    group
}

fn build_blog(sender: &Sender<Message>) -> Group {
    let group = page_group();

    heading(CONTENT_Y + 16, "Notes");

    for (index, post) in content::BLOG_POSTS.iter().enumerate() {
        let y = CONTENT_Y + 54 + (index as i32) * 140;

        let mut title = Frame::new(24, y, WIN_W - 48, 24, post.title);
        title.set_label_font(Font::HelveticaBold);
        title.set_align(Align::Left | Align::Inside);

        let mut excerpt = Frame::new(24, y + 26, WIN_W - 48, 44, post.excerpt);
        excerpt.set_align(Align::Left | Align::Inside | Align::Wrap);

        let mut more = Button::new(24, y + 74, 120, 32, "Read more");
        more.emit(*sender, Message::OpenPost(index));
        activate_on_enter(&mut more);
    }

    group.end();
    group
}

fn build_contact(sender: &Sender<Message>) -> (Group, FormWidgets) {
    let group = page_group();

    heading(CONTENT_Y + 16, "Get in touch");

    let mut hint = Frame::new(
        24,
        CONTENT_Y + 48,
        WIN_W - 48,
        24,
        "This demo form validates locally; nothing is transmitted.",
    );
    hint.set_align(Align::Left | Align::Inside);

    Frame::new(24, CONTENT_Y + 88, 100, 28, "Name:");
    let name = Input::new(132, CONTENT_Y + 88, 420, 28, None);

    Frame::new(24, CONTENT_Y + 126, 100, 28, "Email:");
    let email = Input::new(132, CONTENT_Y + 126, 420, 28, None);

    Frame::new(24, CONTENT_Y + 164, 100, 28, "Message:");
    let message = MultilineInput::new(132, CONTENT_Y + 164, 420, 130, None);

    let mut status = Frame::new(132, CONTENT_Y + 306, 560, 24, None);
    status.set_align(Align::Left | Align::Inside);

    let mut send = Button::new(132, CONTENT_Y + 342, 140, 36, "Send message");
    send.emit(*sender, Message::SubmitForm(FormId(0)));

    group.end();

    let form = FormWidgets {
        id: FormId(0),
        name,
        email,
        message,
        status,
    };
    (group, form)
}
