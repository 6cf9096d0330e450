use fltk::{
    app,
    button::{Button, ToggleButton},
    enums::{Color, Font},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::theme::Theme;

pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, is_dark: bool) {
    if is_dark {
        // Dark mode colors
        app::background(25, 25, 25);
        app::background2(30, 30, 30);
        app::foreground(220, 220, 220);
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
    } else {
        // Light mode colors
        app::background(240, 240, 240);
        app::background2(255, 255, 255);
        app::foreground(20, 20, 20);
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
    }

    menu.redraw();
    window.redraw();
    app::redraw();
}

/// Reflect the theme onto one toggle control: pressed means light, and the
/// glyph shows the active theme. Every registered control gets this on
/// every change, not just the one that was clicked.
pub fn style_theme_toggle(button: &mut ToggleButton, theme: Theme) {
    button.set_value(theme == Theme::Light);
    button.set_label(theme.glyph());
    button.redraw();
}

/// Highlight state for one navigation button.
pub fn style_nav_button(button: &mut Button, active: bool, is_dark: bool) {
    if active {
        button.set_label_font(Font::HelveticaBold);
        button.set_label_color(if is_dark {
            Color::from_rgb(120, 180, 255)
        } else {
            Color::from_rgb(20, 90, 200)
        });
    } else {
        button.set_label_font(Font::Helvetica);
        button.set_label_color(if is_dark {
            Color::from_rgb(220, 220, 220)
        } else {
            Color::Black
        });
    }
    button.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
