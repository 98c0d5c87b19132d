//! Leptos File Drop Utilities
//!
//! Native file drag-and-drop for Leptos using HTML5 drag events.
//! Only the first file of a drop or picker selection is taken; it is
//! classified against an extension allow-list by name, never by content.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A file picked or dropped by the user (metadata only, bytes are never read)
#[derive(Clone, Debug, PartialEq)]
pub struct DroppedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self { name: name.into(), size_bytes }
    }

    /// Lowercased extension without the dot
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.name)
    }

    /// Human readable size, e.g. "2.4 MB"
    pub fn size_label(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;
        let bytes = self.size_bytes as f64;
        if bytes >= MB {
            format!("{:.1} MB", bytes / MB)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes / KB)
        } else {
            format!("{} B", self.size_bytes)
        }
    }
}

/// Result of a drop or picker change
#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    Accepted(DroppedFile),
    /// File extension is not in the allow-list
    Rejected(DroppedFile),
    /// No file was carried by the event
    Empty,
}

/// Extension after the last dot, lowercased. Dotfiles have no extension.
pub fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Allow-list entries may be written with or without the leading dot
pub fn is_allowed(name: &str, allowed: &[&str]) -> bool {
    match extension_of(name) {
        Some(ext) => allowed
            .iter()
            .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(&ext)),
        None => false,
    }
}

/// Value for an `<input type="file" accept=...>` attribute
pub fn accept_attr(allowed: &[&str]) -> String {
    allowed
        .iter()
        .map(|a| format!(".{}", a.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn classify(file: Option<DroppedFile>, allowed: &[&str]) -> DropOutcome {
    match file {
        Some(f) if is_allowed(&f.name, allowed) => DropOutcome::Accepted(f),
        Some(f) => DropOutcome::Rejected(f),
        None => DropOutcome::Empty,
    }
}

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// A drag carrying files is hovering the zone
    pub drag_active_read: ReadSignal<bool>,
    pub drag_active_write: WriteSignal<bool>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (drag_active_read, drag_active_write) = signal(false);
    FileDropSignals {
        drag_active_read,
        drag_active_write,
    }
}

fn from_web_file(file: web_sys::File) -> DroppedFile {
    DroppedFile::new(file.name(), file.size().max(0.0) as u64)
}

/// Handler for dragenter and dragover. Must prevent default or the browser
/// opens the file instead of firing `drop`.
pub fn make_on_dragover(signals: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !signals.drag_active_read.get_untracked() {
            signals.drag_active_write.set(true);
        }
    }
}

pub fn make_on_dragleave(signals: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        signals.drag_active_write.set(false);
    }
}

/// Drop handler: takes the first file and reports how it classifies
pub fn make_on_drop<F>(
    signals: FileDropSignals,
    allowed: &'static [&'static str],
    on_outcome: F,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    F: Fn(DropOutcome) + Copy + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        signals.drag_active_write.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
            .map(from_web_file);
        on_outcome(classify(file, allowed));
    }
}

/// Change handler for a hidden `<input type="file">`
pub fn make_on_input_change<F>(
    allowed: &'static [&'static str],
    on_outcome: F,
) -> impl Fn(web_sys::Event) + Copy + 'static
where
    F: Fn(DropOutcome) + Copy + 'static,
{
    move |ev: web_sys::Event| {
        ev.prevent_default();
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let file = input
            .as_ref()
            .and_then(|i| i.files())
            .and_then(|files| files.get(0))
            .map(from_web_file);
        // Clear so picking the same file again still fires `change`
        if let Some(i) = input {
            i.set_value("");
        }
        on_outcome(classify(file, allowed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC_FILES: &[&str] = &[".pdf", ".dwg", "rvt", "ifc"];

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("plan.PDF"), Some("pdf".to_string()));
        assert_eq!(extension_of("model.v2.ifc"), Some("ifc".to_string()));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".bashrc"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[test]
    fn test_is_allowed_ignores_case_and_dots() {
        assert!(is_allowed("Sterling Floor Plan.pdf", SPEC_FILES));
        assert!(is_allowed("LOBBY.DWG", SPEC_FILES));
        assert!(is_allowed("tower.rvt", SPEC_FILES));
        assert!(!is_allowed("photo.jpg", SPEC_FILES));
        assert!(!is_allowed("pdf", SPEC_FILES));
    }

    #[test]
    fn test_accept_attr() {
        assert_eq!(accept_attr(SPEC_FILES), ".pdf,.dwg,.rvt,.ifc");
    }

    #[test]
    fn test_classify() {
        let ok = DroppedFile::new("specs.ifc", 10);
        let bad = DroppedFile::new("specs.zip", 10);
        assert_eq!(classify(Some(ok.clone()), SPEC_FILES), DropOutcome::Accepted(ok));
        assert_eq!(classify(Some(bad.clone()), SPEC_FILES), DropOutcome::Rejected(bad));
        assert_eq!(classify(None, SPEC_FILES), DropOutcome::Empty);
    }

    #[test]
    fn test_size_label() {
        assert_eq!(DroppedFile::new("a.pdf", 512).size_label(), "512 B");
        assert_eq!(DroppedFile::new("a.pdf", 2048).size_label(), "2.0 KB");
        assert_eq!(DroppedFile::new("a.pdf", 5 * 1024 * 1024 + 512 * 1024).size_label(), "5.5 MB");
    }
}
