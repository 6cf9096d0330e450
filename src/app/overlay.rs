use std::path::PathBuf;

/// Which of the two overlay instances a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Lightbox,
    Post,
}

/// What an overlay is showing. Built fresh on every open and replaced
/// wholesale by the next open.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayContent {
    /// Gallery lightbox: a caption plus an optional image on disk. A tile
    /// without an image renders the caption as text only.
    Image {
        title: String,
        source: Option<PathBuf>,
    },
    /// Article modal: a heading plus the rendered post body.
    Article { title: String, body_html: String },
}

/// Why an open overlay is being dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    CloseControl,
    ScrimClick,
    EscapeKey,
}

/// Open/closed state shared by the lightbox and the article modal. The two
/// instances differ only in how their content is populated.
#[derive(Debug, Default)]
pub struct OverlayState {
    content: Option<OverlayContent>,
    open: bool,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> Option<&OverlayContent> {
        self.content.as_ref()
    }

    /// Enter the open state, replacing whatever was shown before.
    pub fn open(&mut self, content: OverlayContent) {
        self.content = Some(content);
        self.open = true;
    }

    /// Leave the open state. Content is kept around; the next open
    /// overwrites it.
    pub fn close(&mut self, _reason: Dismiss) {
        self.open = false;
    }
}

/// True when a click at (x, y) landed on the scrim, outside the content box
/// (x, y, w, h). Clicks inside the box must not dismiss the overlay.
pub fn scrim_hit(x: i32, y: i32, content_box: (i32, i32, i32, i32)) -> bool {
    let (cx, cy, cw, ch) = content_box;
    x < cx || x >= cx + cw || y < cy || y >= cy + ch
}
