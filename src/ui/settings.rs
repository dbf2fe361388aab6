use crate::api::AssistantClient;
use crate::state::AppState;
use adw::prelude::*;
use adw::{ActionRow, PreferencesGroup, PreferencesPage, PreferencesWindow};
use gtk4::{glib, Entry};
use std::cell::RefCell;
use std::rc::Rc;

/// Shows the settings window for the backend connection. The edited URL is
/// persisted and the HTTP client rebuilt when the window closes.
pub fn show_settings(parent: &gtk4::Window, state: Rc<RefCell<AppState>>) {
    let window = PreferencesWindow::builder()
        .transient_for(parent)
        .modal(true)
        .title("Configuración")
        .default_width(480)
        .build();

    let page = PreferencesPage::new();
    page.set_title("General");
    page.set_icon_name(Some("preferences-system-symbolic"));
    window.add(&page);

    let group = PreferencesGroup::new();
    group.set_title("Backend");
    group.set_description(Some("Servicio de procesamiento de texto"));
    page.add(&group);

    let url_row = ActionRow::builder()
        .title("URL del Servicio")
        .subtitle("Dirección base del backend")
        .build();
    let url_entry = Entry::builder()
        .valign(gtk4::Align::Center)
        .hexpand(true)
        .text(&state.borrow().config.backend_url)
        .build();
    url_row.add_suffix(&url_entry);
    group.add(&url_row);

    window.connect_close_request(glib::clone!(
        #[strong]
        state,
        #[strong]
        url_entry,
        move |_| {
            let mut s = state.borrow_mut();
            let url = url_entry.text().trim().to_string();
            if !url.is_empty() && url != s.config.backend_url {
                s.config.backend_url = url;
                if let Err(e) = s.config.save() {
                    tracing::error!("Failed to save config: {}", e);
                }
                s.client = AssistantClient::new(&s.config.backend_url);
                tracing::info!("Backend URL updated to {}", s.config.backend_url);
            }
            glib::Propagation::Proceed
        }
    ));

    window.present();
}
