use std::path::PathBuf;

use fltk::{app, dialog, prelude::*};

use super::content::{self, PageId};
use super::form::{self, FormController, FormId, Submission, SubmitOutcome};
use super::markdown::render_markdown;
use super::messages::Message;
use super::modality::InputModality;
use super::nav;
use super::overlay::{OverlayContent, OverlayKind};
use super::prefs::PreferenceStore;
use super::theme::{Theme, ThemeController};
use crate::ui::main_window::MainWidgets;
use crate::ui::overlay::OverlayHandle;
use crate::ui::pages::FormWidgets;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;
use crate::ui::theme::{apply_theme, style_nav_button, style_theme_toggle};

/// One demo form: its widgets paired with its submission state machine.
pub struct FormBinding {
    pub widgets: FormWidgets,
    pub controller: FormController,
}

pub struct AppState {
    pub widgets: MainWidgets,
    pub theme: ThemeController,
    pub lightbox: OverlayHandle,
    pub post_modal: OverlayHandle,
    pub forms: Vec<FormBinding>,
    pub modality: InputModality,
    /// Location path of the page being shown, in the published site's
    /// terms. Drives the active-link computation.
    pub location: String,
    pub sender: app::Sender<Message>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        forms: Vec<FormWidgets>,
        store: PreferenceStore,
        sender: app::Sender<Message>,
    ) -> Self {
        let theme = ThemeController::new(store);
        let lightbox = OverlayHandle::lightbox(&sender);
        let post_modal = OverlayHandle::post_modal(&sender);

        let forms = forms
            .into_iter()
            .map(|widgets| FormBinding {
                widgets,
                controller: FormController::default(),
            })
            .collect();

        Self {
            widgets,
            theme,
            lightbox,
            post_modal,
            forms,
            modality: InputModality::default(),
            location: PageId::Home.location_path().to_string(),
            sender,
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::ShowPage(page) => self.show_page(page),
            Message::ToggleTheme => {
                let theme = self.theme.toggle();
                self.apply_theme(theme);
            }
            Message::OpenLightbox(index) => self.open_lightbox(index),
            Message::OpenPost(index) => self.open_post(index),
            Message::DismissOverlay(kind, reason) => match kind {
                OverlayKind::Lightbox => self.lightbox.close(reason),
                OverlayKind::Post => self.post_modal.close(reason),
            },
            Message::SubmitForm(id) => self.submit_form(id),
            Message::SendElapsed { form, generation } => self.finish_send(form, generation),
            Message::TabPressed => {
                if self.modality.observe_tab() {
                    app::set_visible_focus(true);
                }
            }
            Message::OpenProjectLink(index) => self.open_project_link(index),
            Message::ShowAbout => crate::ui::dialogs::show_about_dialog(),
            Message::Quit => app::quit(),
        }
    }

    // --- Navigation ---

    pub fn show_page(&mut self, page: PageId) {
        self.location = page.location_path().to_string();
        self.widgets
            .stack
            .set_current_widget(self.widgets.pages.group_for(page));
        self.refresh_nav();
    }

    fn refresh_nav(&mut self) {
        let is_dark = self.theme.current().is_dark();
        for (page, button) in &mut self.widgets.nav_buttons {
            let active = nav::link_is_active(page.href(), &self.location);
            style_nav_button(button, active, is_dark);
        }
    }

    // --- Theme ---

    /// Reflect `theme` onto the whole window and every toggle control.
    pub fn apply_theme(&mut self, theme: Theme) {
        apply_theme(&mut self.widgets.window, &mut self.widgets.menu, theme.is_dark());
        for toggle in &mut self.widgets.theme_toggles {
            style_theme_toggle(toggle, theme);
        }
        self.refresh_nav();

        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.window, theme.is_dark());
    }

    // --- Overlays ---

    fn open_lightbox(&mut self, index: usize) {
        let Some(tile) = content::GALLERY_TILES.get(index) else {
            return;
        };
        self.lightbox.open(OverlayContent::Image {
            title: tile.title.to_string(),
            source: tile.image.map(PathBuf::from),
        });
    }

    fn open_post(&mut self, index: usize) {
        let Some(post) = content::BLOG_POSTS.get(index) else {
            return;
        };
        self.post_modal.open(OverlayContent::Article {
            title: post.title.to_string(),
            body_html: render_markdown(post.body_md),
        });
    }

    // --- Contact form demo ---

    fn submit_form(&mut self, id: FormId) {
        let Some(binding) = self.forms.iter_mut().find(|f| f.widgets.id == id) else {
            return;
        };

        binding.widgets.status.set_label("");

        let submission = Submission {
            name: binding.widgets.name.value(),
            email: binding.widgets.email.value(),
            message: binding.widgets.message.value(),
        };

        match binding.controller.submit(&submission) {
            SubmitOutcome::Rejected(text) => binding.widgets.status.set_label(text),
            SubmitOutcome::Accepted { generation } => {
                binding.widgets.status.set_label(form::STATUS_SENDING);
                let s = self.sender;
                app::add_timeout3(form::SEND_DELAY_SECONDS, move |_| {
                    s.send(Message::SendElapsed { form: id, generation });
                });
            }
        }
    }

    fn finish_send(&mut self, id: FormId, generation: u64) {
        let Some(binding) = self.forms.iter_mut().find(|f| f.widgets.id == id) else {
            return;
        };
        if !binding.controller.send_elapsed(generation) {
            return;
        }

        binding.widgets.status.set_label(form::STATUS_SENT);
        binding.widgets.name.set_value("");
        binding.widgets.email.set_value("");
        binding.widgets.message.set_value("");
    }

    // --- Outbound links ---

    fn open_project_link(&mut self, index: usize) {
        let Some(project) = content::PROJECTS.get(index) else {
            return;
        };
        if let Err(e) = open::that(project.url) {
            dialog::alert_default(&format!("Error opening {}: {}", project.url, e));
        }
    }
}
