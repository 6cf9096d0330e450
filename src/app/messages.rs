use super::content::PageId;
use super::form::FormId;
use super::overlay::{Dismiss, OverlayKind};

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    ShowPage(PageId),

    // Theme
    ToggleTheme,

    // Overlays
    OpenLightbox(usize),
    OpenPost(usize),
    DismissOverlay(OverlayKind, Dismiss),

    // Contact form demo
    SubmitForm(FormId),
    SendElapsed { form: FormId, generation: u64 },

    // Accessibility
    TabPressed,

    // Chrome
    OpenProjectLink(usize),
    ShowAbout,
    Quit,
}
