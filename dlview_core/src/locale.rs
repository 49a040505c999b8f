//! Localized string tables.
//!
//! Exactly two locales are supported. Both tables are compiled into the
//! binary and one is picked at startup by tag; the tables themselves are
//! `'static` and never mutated, so they can be shared across tasks
//! without synchronization.

use crate::buttons::ButtonId;

/// Immutable mapping of message keys to localized strings.
///
/// The three `downloading_*` fragments are joined around the formatted
/// size and rate, in order:
/// `prefix + "<MB>.<tenths>" + mid + "<KB/s>" + suffix`.
#[derive(Debug)]
pub struct LocaleTable {
    pub window_header: &'static str,

    pub status_ready: &'static str,
    pub status_complete: &'static str,
    pub status_error: &'static str,

    pub downloading_prefix: &'static str,
    pub downloading_mid: &'static str,
    pub downloading_suffix: &'static str,

    /// `%s` is replaced with the file path.
    pub file_saved_as: &'static str,
    /// `%s` is replaced with the file path.
    pub save_failed: &'static str,
    pub start_failed: &'static str,

    pub btn_exit: &'static str,
    pub btn_start: &'static str,
    pub btn_stop: &'static str,
    pub btn_open_dir: &'static str,
    pub btn_run: &'static str,
    pub btn_new_download: &'static str,

    /// Value for the `Accept-Language` header handed to the transfer engine.
    pub accept_language: &'static str,
}

impl LocaleTable {
    pub fn button_label(&self, button: ButtonId) -> &'static str {
        match button {
            ButtonId::Exit => self.btn_exit,
            ButtonId::Start => self.btn_start,
            ButtonId::Stop => self.btn_stop,
            ButtonId::OpenDir => self.btn_open_dir,
            ButtonId::Run => self.btn_run,
            ButtonId::NewDownload => self.btn_new_download,
        }
    }
}

pub static EN: LocaleTable = LocaleTable {
    window_header: "Download Manager",

    status_ready: "Ready to download",
    status_complete: "Download complete",
    status_error: "Download error",

    downloading_prefix: "Downloading... ",
    downloading_mid: " MB received (",
    downloading_suffix: " KB/s)",

    file_saved_as: "File saved as %s",
    save_failed: "Could not save file %s",
    start_failed: "Download failed, check the URL or your connection",

    btn_exit: "Exit",
    btn_start: "Start",
    btn_stop: "Stop",
    btn_open_dir: "Open folder",
    btn_run: "Open file",
    btn_new_download: "New download",

    accept_language: "en",
};

pub static RU: LocaleTable = LocaleTable {
    window_header: "Менеджер загрузок",

    status_ready: "Готов к загрузке",
    status_complete: "Загрузка завершена",
    status_error: "Ошибка загрузки",

    downloading_prefix: "Загрузка... ",
    downloading_mid: " МБ получено (",
    downloading_suffix: " КБ/с)",

    file_saved_as: "Файл сохранён как %s",
    save_failed: "Не удалось сохранить файл %s",
    start_failed: "Загрузка не началась, проверьте адрес или соединение",

    btn_exit: "Выход",
    btn_start: "Старт",
    btn_stop: "Стоп",
    btn_open_dir: "Открыть папку",
    btn_run: "Открыть файл",
    btn_new_download: "Новая загрузка",

    accept_language: "ru",
};

/// Supported locales. A closed set; adding a locale means adding a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Ru,
}

impl Locale {
    /// Resolve a two-letter tag. Anything that is not `ru` (case
    /// insensitive) falls open to `En` — an unsupported locale is a
    /// usability concern, never an error.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("ru") {
            Locale::Ru
        } else {
            if !tag.eq_ignore_ascii_case("en") {
                log::debug!("unsupported locale tag {:?}, falling back to en", tag);
            }
            Locale::En
        }
    }

    pub fn table(self) -> &'static LocaleTable {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

/// Pick the string table for a locale tag, falling back to `en`.
pub fn select_locale(tag: &str) -> &'static LocaleTable {
    Locale::from_tag(tag).table()
}
