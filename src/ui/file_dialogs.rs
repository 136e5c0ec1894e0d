use fltk::dialog;

/// Notes the open dialog offers by default
pub const NOTE_FILTER: &str = "*.{md,markdown,txt}";

pub fn native_open_dialog(pattern: &str) -> Option<String> {
    dialog::file_chooser("Open Note", pattern, ".", false)
}
