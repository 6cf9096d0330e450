use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Event, Key},
    frame::Frame,
    group::Group,
    image::SharedImage,
    misc::HelpView,
    prelude::*,
    window::Window,
};

use crate::app::content;
use crate::app::markdown::wrap_html_for_helpview;
use crate::app::messages::Message;
use crate::app::overlay::{self, Dismiss, OverlayContent, OverlayKind, OverlayState};

const OVERLAY_W: i32 = 680;
const OVERLAY_H: i32 = 520;

/// A lightbox or article modal: a hidden modal window whose margins act as
/// the dismissal scrim around the content box.
pub struct OverlayPanel {
    window: Window,
    content_box: Group,
    image_frame: Frame,
    body: HelpView,
    close: Button,
    state: OverlayState,
}

impl OverlayPanel {
    fn build(kind: OverlayKind, sender: &Sender<Message>) -> Self {
        let mut window = Window::default()
            .with_size(OVERLAY_W, OVERLAY_H)
            .with_label("Preview")
            .center_screen();
        window.make_modal(true);

        let content_box = Group::new(40, 30, OVERLAY_W - 80, OVERLAY_H - 90, None);

        let mut close = Button::new(OVERLAY_W - 120, 38, 72, 28, "Close");
        close.set_tooltip("Close (Esc)");
        close.emit(*sender, Message::DismissOverlay(kind, Dismiss::CloseControl));

        let image_frame = Frame::new(56, 76, OVERLAY_W - 112, OVERLAY_H - 152, None);
        let body = HelpView::new(56, 76, OVERLAY_W - 112, OVERLAY_H - 152, None);

        content_box.end();
        window.end();

        // Escape closes from anywhere; a click on the scrim outside the
        // content box closes; clicks inside it do not.
        let s = *sender;
        let hit_box = content_box.clone();
        window.handle(move |_, event| match event {
            Event::KeyDown if app::event_key() == Key::Escape => {
                s.send(Message::DismissOverlay(kind, Dismiss::EscapeKey));
                true
            }
            Event::Push => {
                let (x, y) = app::event_coords();
                let bounds = (hit_box.x(), hit_box.y(), hit_box.w(), hit_box.h());
                if overlay::scrim_hit(x, y, bounds) {
                    s.send(Message::DismissOverlay(kind, Dismiss::ScrimClick));
                    true
                } else {
                    false
                }
            }
            _ => false,
        });

        // A window-manager close counts as the dismiss control.
        let s = *sender;
        window.set_callback(move |_| {
            s.send(Message::DismissOverlay(kind, Dismiss::CloseControl));
        });

        Self {
            window,
            content_box,
            image_frame,
            body,
            close,
            state: OverlayState::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Populate the panel from `content`, show it, and hand focus to the
    /// dismiss control.
    pub fn open(&mut self, content: OverlayContent) {
        self.populate(&content);
        self.state.open(content);
        self.content_box.redraw();
        self.window.show();
        let _ = self.close.take_focus();
    }

    pub fn close(&mut self, reason: Dismiss) {
        if !self.state.is_open() {
            return;
        }
        self.state.close(reason);
        self.window.hide();
    }

    fn populate(&mut self, content: &OverlayContent) {
        match content {
            OverlayContent::Image { title, source } => {
                self.window.set_label(title);

                let loaded = source.as_ref().and_then(|path| SharedImage::load(path).ok());
                match loaded {
                    Some(mut image) => {
                        image.scale(self.image_frame.w(), self.image_frame.h(), true, true);
                        self.image_frame.set_image(Some(image));
                        self.image_frame.set_tooltip(title);
                        self.body.hide();
                        self.image_frame.show();
                    }
                    None => {
                        // No image (or an unloadable one): the caption
                        // carries the tile.
                        self.image_frame.set_image(None::<SharedImage>);
                        self.body.set_value(&wrap_html_for_helpview(&format!(
                            "<p><b>{}</b></p>",
                            title
                        )));
                        self.image_frame.hide();
                        self.body.show();
                    }
                }
            }
            OverlayContent::Article { title, body_html } => {
                self.window.set_label(title);
                self.body.set_value(&wrap_html_for_helpview(&format!(
                    "<h2>{}</h2>{}",
                    title, body_html
                )));
                self.image_frame.hide();
                self.body.show();
            }
        }
    }
}

/// An overlay, or the typed no-op used when the content that would feed it
/// doesn't exist. The disabled variant installs no widgets and no handlers.
pub enum OverlayHandle {
    Active(OverlayPanel),
    Disabled,
}

impl OverlayHandle {
    /// The gallery lightbox. Disabled when there are no tiles to show.
    pub fn lightbox(sender: &Sender<Message>) -> Self {
        if content::GALLERY_TILES.is_empty() {
            OverlayHandle::Disabled
        } else {
            OverlayHandle::Active(OverlayPanel::build(OverlayKind::Lightbox, sender))
        }
    }

    /// The article modal. Disabled when there are no posts.
    pub fn post_modal(sender: &Sender<Message>) -> Self {
        if content::BLOG_POSTS.is_empty() {
            OverlayHandle::Disabled
        } else {
            OverlayHandle::Active(OverlayPanel::build(OverlayKind::Post, sender))
        }
    }

    pub fn open(&mut self, content: OverlayContent) {
        if let OverlayHandle::Active(panel) = self {
            panel.open(content);
        }
    }

    pub fn close(&mut self, reason: Dismiss) {
        if let OverlayHandle::Active(panel) = self {
            panel.close(reason);
        }
    }

    pub fn is_open(&self) -> bool {
        match self {
            OverlayHandle::Active(panel) => panel.is_open(),
            OverlayHandle::Disabled => false,
        }
    }
}
