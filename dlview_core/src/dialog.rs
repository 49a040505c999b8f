//! File-dialog message rendering.
//!
//! The UI shell owns the dialogs themselves; this module only fills the
//! localized templates. Templates take a single `%s` path argument.

use std::path::Path;

use crate::locale::LocaleTable;

/// "Saved successfully" message for the given destination path.
pub fn saved_message(table: &LocaleTable, path: &Path) -> String {
    substitute(table.file_saved_as, path)
}

/// "Save failed" message — recoverable, user-visible, never fatal.
pub fn save_failed_message(table: &LocaleTable, path: &Path) -> String {
    substitute(table.save_failed, path)
}

/// Download-start failure message. The shell shows this and returns the
/// dialog to the Ready state.
pub fn start_failed_message(table: &LocaleTable) -> String {
    table.start_failed.to_string()
}

fn substitute(template: &str, path: &Path) -> String {
    template.replacen("%s", &path.display().to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN, RU};
    use std::path::PathBuf;

    #[test]
    fn saved_message_substitutes_the_path() {
        let path = PathBuf::from("Downloads/file.zip");
        assert_eq!(
            saved_message(&EN, &path),
            "File saved as Downloads/file.zip"
        );
        assert_eq!(
            saved_message(&RU, &path),
            "Файл сохранён как Downloads/file.zip"
        );
    }

    #[test]
    fn save_failed_message_substitutes_the_path() {
        let path = PathBuf::from("/readonly/file.zip");
        assert_eq!(
            save_failed_message(&EN, &path),
            "Could not save file /readonly/file.zip"
        );
    }

    #[test]
    fn substitution_replaces_only_the_placeholder() {
        let path = PathBuf::from("a%sb");
        // A path containing "%s" must not be re-expanded.
        assert_eq!(substitute("got %s", &path), "got a%sb");
    }
}
