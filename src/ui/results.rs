use crate::constants::{LOADING_TEXT, PLACEHOLDER_TEXT};
use crate::state::{ResultKind, ViewState};
use gtk4::prelude::*;
use gtk4::{Box, Label, ListBox, ListBoxRow, Orientation, SelectionMode};

/// Widgets of the result area.
///
/// Built once at startup; `render` projects the view state onto them after
/// every transition. Exactly one of loading indicator, summary columns,
/// key-point columns, or placeholder is visible at any time, with the status
/// line above whenever non-empty.
pub struct ResultsPanel {
    pub container: Box,
    status_label: Label,
    loading_label: Label,
    placeholder_label: Label,
    summary_box: Box,
    summary_es_label: Label,
    summary_en_label: Label,
    key_points_box: Box,
    key_points_es_list: ListBox,
    key_points_en_list: ListBox,
}

impl ResultsPanel {
    pub fn new() -> Self {
        let container = Box::new(Orientation::Vertical, 12);

        let status_label = Label::builder()
            .wrap(true)
            .xalign(0.0)
            .visible(false)
            .build();
        status_label.add_css_class("heading");
        container.append(&status_label);

        let loading_label = Label::builder().label(LOADING_TEXT).visible(false).build();
        loading_label.add_css_class("dim-label");
        container.append(&loading_label);

        let summary_box = Box::new(Orientation::Horizontal, 12);
        summary_box.set_homogeneous(true);
        summary_box.set_visible(false);
        let (es_column, summary_es_label) = text_column("Resumen en Español:");
        let (en_column, summary_en_label) = text_column("Summary in English:");
        summary_box.append(&es_column);
        summary_box.append(&en_column);
        container.append(&summary_box);

        let key_points_box = Box::new(Orientation::Horizontal, 12);
        key_points_box.set_homogeneous(true);
        key_points_box.set_visible(false);
        let (es_column, key_points_es_list) = list_column("Puntos Clave en Español:");
        let (en_column, key_points_en_list) = list_column("Key Points in English:");
        key_points_box.append(&es_column);
        key_points_box.append(&en_column);
        container.append(&key_points_box);

        let placeholder_label = Label::builder()
            .label(PLACEHOLDER_TEXT)
            .wrap(true)
            .xalign(0.0)
            .build();
        placeholder_label.add_css_class("dim-label");
        container.append(&placeholder_label);

        Self {
            container,
            status_label,
            loading_label,
            placeholder_label,
            summary_box,
            summary_es_label,
            summary_en_label,
            key_points_box,
            key_points_es_list,
            key_points_en_list,
        }
    }

    /// Projects `view` onto the result widgets. Pure with respect to the view
    /// state: nothing here mutates it.
    pub fn render(&self, view: &ViewState) {
        self.status_label.set_visible(!view.status.is_empty());
        self.status_label.set_text(&view.status);

        self.loading_label.set_visible(view.pending);

        let show_summary =
            !view.pending && view.kind == ResultKind::Summary && view.summary.is_some();
        self.summary_box.set_visible(show_summary);
        if show_summary {
            if let Some(summary) = view.summary.as_ref() {
                self.summary_es_label.set_text(&summary.spanish);
                self.summary_en_label.set_text(&summary.english);
            }
        }

        let show_key_points = !view.pending
            && view.kind == ResultKind::KeyPoints
            && view
                .key_points
                .as_ref()
                .is_some_and(|points| !points.spanish.is_empty() && !points.english.is_empty());
        self.key_points_box.set_visible(show_key_points);
        self.key_points_es_list.remove_all();
        self.key_points_en_list.remove_all();
        if show_key_points {
            if let Some(points) = view.key_points.as_ref() {
                for point in &points.spanish {
                    self.key_points_es_list.append(&point_row(point));
                }
                for point in &points.english {
                    self.key_points_en_list.append(&point_row(point));
                }
            }
        }

        self.placeholder_label.set_visible(view.is_untouched());
    }
}

fn column_heading(heading: &str) -> Label {
    let title = Label::builder().label(heading).xalign(0.0).build();
    title.add_css_class("heading");
    title
}

fn text_column(heading: &str) -> (Box, Label) {
    let column = Box::new(Orientation::Vertical, 6);
    column.append(&column_heading(heading));
    let body = Label::builder()
        .wrap(true)
        .xalign(0.0)
        .selectable(true)
        .valign(gtk4::Align::Start)
        .build();
    column.append(&body);
    (column, body)
}

fn list_column(heading: &str) -> (Box, ListBox) {
    let column = Box::new(Orientation::Vertical, 6);
    column.append(&column_heading(heading));
    let list = ListBox::new();
    list.set_selection_mode(SelectionMode::None);
    list.add_css_class("boxed-list");
    column.append(&list);
    (column, list)
}

fn point_row(text: &str) -> ListBoxRow {
    let label = Label::builder()
        .label(text)
        .wrap(true)
        .xalign(0.0)
        .margin_top(6)
        .margin_bottom(6)
        .margin_start(8)
        .margin_end(8)
        .build();
    ListBoxRow::builder().child(&label).activatable(false).build()
}
