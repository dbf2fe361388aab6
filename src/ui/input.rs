use crate::constants::{BTN_KEY_POINTS, BTN_SUMMARY, INPUT_CAPTION};
use gtk4::prelude::*;
use gtk4::{
    Box, Button, Label, Orientation, ScrolledWindow, Spinner, TextBuffer, TextView, WrapMode,
};

/// Creates the text input area and the two request buttons.
pub fn create_input_panel() -> (Box, TextBuffer, Button, Button, Spinner) {
    let container = Box::new(Orientation::Vertical, 8);

    let caption = Label::builder()
        .label(INPUT_CAPTION)
        .wrap(true)
        .xalign(0.0)
        .build();
    caption.add_css_class("dim-label");
    container.append(&caption);

    let buffer = TextBuffer::new(None);
    let text_view = TextView::with_buffer(&buffer);
    text_view.set_wrap_mode(WrapMode::WordChar);
    text_view.set_top_margin(8);
    text_view.set_bottom_margin(8);
    text_view.set_left_margin(8);
    text_view.set_right_margin(8);

    let input_scroll = ScrolledWindow::builder()
        .child(&text_view)
        .hexpand(true)
        .min_content_height(200)
        .build();
    input_scroll.add_css_class("card");
    container.append(&input_scroll);

    let button_box = Box::new(Orientation::Horizontal, 8);
    button_box.set_halign(gtk4::Align::Center);

    let summary_btn = Button::with_label(BTN_SUMMARY);
    summary_btn.add_css_class("suggested-action");
    let key_points_btn = Button::with_label(BTN_KEY_POINTS);
    let spinner = Spinner::new();

    button_box.append(&summary_btn);
    button_box.append(&key_points_btn);
    button_box.append(&spinner);
    container.append(&button_box);

    (container, buffer, summary_btn, key_points_btn, spinner)
}
