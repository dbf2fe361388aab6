use gtk4::prelude::*;

/// Returns the full contents of a text buffer as an owned string.
pub fn buffer_to_string(buffer: &gtk4::TextBuffer) -> String {
    let (start, end) = buffer.bounds();
    buffer.text(&start, &end, false).to_string()
}
