mod accessibility;
mod api;
mod config;
mod constants;
mod state;
mod ui;
mod utils;

use adw::prelude::*;
use adw::Application;
use gtk4::{gdk, glib, Orientation};
use std::cell::RefCell;
use std::rc::Rc;

use crate::accessibility::{AccessibilitySettings, FontFamily};
use crate::api::AssistantClient;
use crate::config::AppConfig;
use crate::constants::{
    APP_ID, APP_NAME, BTN_KEY_POINTS, BTN_KEY_POINTS_PENDING, BTN_SUMMARY, BTN_SUMMARY_PENDING,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};
use crate::state::{AppState, ResultKind, ViewState};
use crate::ui::results::ResultsPanel;

#[tokio::main]
async fn main() -> glib::ExitCode {
    tracing_subscriber::fmt::init();

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);

    app.run()
}

fn build_ui(app: &Application) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .default_width(DEFAULT_WINDOW_WIDTH)
        .default_height(DEFAULT_WINDOW_HEIGHT)
        .title(APP_NAME)
        .build();

    let content_box = gtk4::Box::new(Orientation::Vertical, 0);
    window.set_content(Some(&content_box));

    let (header_bar, _view_title, settings_btn) = ui::header::create_header_bar();
    content_box.append(&header_bar);

    let config = AppConfig::load();
    tracing::info!("Using backend at {}", config.backend_url);
    let state = Rc::new(RefCell::new(AppState {
        client: AssistantClient::new(&config.backend_url),
        config,
        view: ViewState::new(),
        accessibility: AccessibilitySettings::default(),
    }));

    // Window-wide presentation (font + contrast). Every settings change
    // reloads the provider with a freshly generated stylesheet.
    let style_provider = gtk4::CssProvider::new();
    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &style_provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
    style_provider.load_from_string(&state.borrow().accessibility.css());

    let page_scroll = gtk4::ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .build();
    content_box.append(&page_scroll);

    let page = gtk4::Box::new(Orientation::Vertical, 18);
    page.set_margin_top(18);
    page.set_margin_bottom(18);
    page.set_margin_start(18);
    page.set_margin_end(18);
    page_scroll.set_child(Some(&page));

    let (accessibility_group, size_scale, size_label, family_dropdown, contrast_switch) =
        ui::accessibility::create_accessibility_panel();
    page.append(&accessibility_group);

    let (input_panel, input_buffer, summary_btn, key_points_btn, spinner) =
        ui::input::create_input_panel();
    page.append(&input_panel);

    let results = Rc::new(ResultsPanel::new());
    page.append(&results.container);

    // Projects pending/result state onto the widgets after every transition.
    let refresh: Rc<dyn Fn()> = {
        let state = state.clone();
        let results = results.clone();
        let summary_btn = summary_btn.downgrade();
        let key_points_btn = key_points_btn.downgrade();
        let spinner = spinner.downgrade();
        Rc::new(move || {
            let (Some(summary_btn), Some(key_points_btn), Some(spinner)) = (
                summary_btn.upgrade(),
                key_points_btn.upgrade(),
                spinner.upgrade(),
            ) else {
                return;
            };

            let s = state.borrow();
            results.render(&s.view);

            let pending = s.view.pending;
            summary_btn.set_sensitive(!pending);
            key_points_btn.set_sensitive(!pending);
            if pending {
                spinner.start();
            } else {
                spinner.stop();
            }
            summary_btn.set_label(if pending && s.view.kind == ResultKind::Summary {
                BTN_SUMMARY_PENDING
            } else {
                BTN_SUMMARY
            });
            key_points_btn.set_label(if pending && s.view.kind == ResultKind::KeyPoints {
                BTN_KEY_POINTS_PENDING
            } else {
                BTN_KEY_POINTS
            });
        })
    };

    // Accessibility controls apply to the whole window immediately.
    size_scale.connect_value_changed(glib::clone!(
        #[strong]
        state,
        #[weak]
        size_label,
        #[strong]
        style_provider,
        move |scale| {
            let mut s = state.borrow_mut();
            s.accessibility.set_font_size(scale.value().round() as i32);
            size_label.set_text(&format!("{}px", s.accessibility.font_size_px));
            style_provider.load_from_string(&s.accessibility.css());
        }
    ));

    family_dropdown.connect_selected_notify(glib::clone!(
        #[strong]
        state,
        #[strong]
        style_provider,
        move |dropdown| {
            let Some(family) = FontFamily::ALL.get(dropdown.selected() as usize) else {
                return;
            };
            let mut s = state.borrow_mut();
            s.accessibility.font_family = *family;
            style_provider.load_from_string(&s.accessibility.css());
        }
    ));

    contrast_switch.connect_active_notify(glib::clone!(
        #[strong]
        state,
        #[strong]
        style_provider,
        move |switch| {
            let mut s = state.borrow_mut();
            s.accessibility.high_contrast = switch.is_active();
            style_provider.load_from_string(&s.accessibility.css());
        }
    ));

    // Request: bilingual summary.
    summary_btn.connect_clicked(glib::clone!(
        #[strong]
        state,
        #[weak]
        input_buffer,
        #[strong]
        refresh,
        move |_| {
            let text = crate::utils::buffer_to_string(&input_buffer);
            let proceed = state
                .borrow_mut()
                .view
                .begin_request(ResultKind::Summary, &text);
            refresh();
            if !proceed {
                return;
            }

            let client = state.borrow().client.clone();
            let ctx = glib::MainContext::default();
            ctx.spawn_local(glib::clone!(
                #[strong]
                state,
                #[strong]
                refresh,
                async move {
                    let outcome = client.summarize(&text).await;
                    state.borrow_mut().view.apply_summary_outcome(outcome);
                    refresh();
                }
            ));
        }
    ));

    // Request: bilingual key points.
    key_points_btn.connect_clicked(glib::clone!(
        #[strong]
        state,
        #[weak]
        input_buffer,
        #[strong]
        refresh,
        move |_| {
            let text = crate::utils::buffer_to_string(&input_buffer);
            let proceed = state
                .borrow_mut()
                .view
                .begin_request(ResultKind::KeyPoints, &text);
            refresh();
            if !proceed {
                return;
            }

            let client = state.borrow().client.clone();
            let ctx = glib::MainContext::default();
            ctx.spawn_local(glib::clone!(
                #[strong]
                state,
                #[strong]
                refresh,
                async move {
                    let outcome = client.key_points(&text).await;
                    state.borrow_mut().view.apply_key_points_outcome(outcome);
                    refresh();
                }
            ));
        }
    ));

    settings_btn.connect_clicked(glib::clone!(
        #[weak]
        window,
        #[strong]
        state,
        move |_| {
            ui::settings::show_settings(window.upcast_ref(), state.clone());
        }
    ));

    refresh();
    window.present();
}
