use crate::constants::APP_NAME;
use adw::{HeaderBar, WindowTitle};
use gtk4::Button;

/// Creates the application header bar with the settings action.
pub fn create_header_bar() -> (HeaderBar, WindowTitle, Button) {
    let header_bar = HeaderBar::new();
    let view_title = WindowTitle::new(APP_NAME, "");
    header_bar.set_title_widget(Some(&view_title));

    let settings_btn = Button::builder()
        .icon_name("emblem-system-symbolic")
        .tooltip_text("Configuración")
        .build();
    header_bar.pack_end(&settings_btn);

    (header_bar, view_title, settings_btn)
}
