use crate::accessibility::FontFamily;
use crate::constants::{DEFAULT_FONT_SIZE_PX, MAX_FONT_SIZE_PX, MIN_FONT_SIZE_PX};
use adw::prelude::*;
use adw::{ActionRow, PreferencesGroup};
use gtk4::{DropDown, Label, Orientation, Scale, StringList, Switch};

/// Creates the accessibility panel: font size slider with a live value label,
/// font family selector, and high contrast toggle.
pub fn create_accessibility_panel() -> (PreferencesGroup, Scale, Label, DropDown, Switch) {
    let group = PreferencesGroup::new();
    group.set_title("Controles de Accesibilidad");

    let size_row = ActionRow::builder().title("Tamaño de Fuente").build();
    let size_scale = Scale::with_range(
        Orientation::Horizontal,
        MIN_FONT_SIZE_PX as f64,
        MAX_FONT_SIZE_PX as f64,
        1.0,
    );
    size_scale.set_value(DEFAULT_FONT_SIZE_PX as f64);
    size_scale.set_valign(gtk4::Align::Center);
    size_scale.set_width_request(220);
    let size_label = Label::new(Some(&format!("{}px", DEFAULT_FONT_SIZE_PX)));
    size_label.set_width_chars(5);
    size_row.add_suffix(&size_scale);
    size_row.add_suffix(&size_label);
    group.add(&size_row);

    let family_row = ActionRow::builder().title("Tipo de Fuente").build();
    let family_labels = FontFamily::ALL.map(|family| family.label());
    let family_model = StringList::new(&family_labels);
    let family_dropdown = DropDown::builder()
        .model(&family_model)
        .valign(gtk4::Align::Center)
        .build();
    family_row.add_suffix(&family_dropdown);
    group.add(&family_row);

    let contrast_row = ActionRow::builder().title("Alto Contraste").build();
    let contrast_switch = Switch::builder().valign(gtk4::Align::Center).build();
    contrast_row.add_suffix(&contrast_switch);
    group.add(&contrast_row);

    (group, size_scale, size_label, family_dropdown, contrast_switch)
}
