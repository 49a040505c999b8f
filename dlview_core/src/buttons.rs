use serde::{Deserialize, Serialize};

use crate::locale::LocaleTable;

/// Dialog button identifiers — the ordinal contract between the UI shell
/// and the command dispatcher. Discriminants are explicit because they
/// must stay stable and distinct across releases; their particular values
/// carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ButtonId {
    Exit = 1,
    Start = 2,
    Stop = 3,
    OpenDir = 4,
    Run = 5,
    NewDownload = 6,
}

impl ButtonId {
    pub const ALL: [ButtonId; 6] = [
        ButtonId::Exit,
        ButtonId::Start,
        ButtonId::Stop,
        ButtonId::OpenDir,
        ButtonId::Run,
        ButtonId::NewDownload,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.id() == id)
    }

    pub fn label(self, table: &LocaleTable) -> &'static str {
        table.button_label(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN, RU};
    use std::collections::HashSet;

    #[test]
    fn ids_are_distinct() {
        let ids: HashSet<u8> = ButtonId::ALL.iter().map(|b| b.id()).collect();
        assert_eq!(ids.len(), ButtonId::ALL.len());
    }

    #[test]
    fn from_id_round_trips() {
        for button in ButtonId::ALL {
            assert_eq!(ButtonId::from_id(button.id()), Some(button));
        }
        assert_eq!(ButtonId::from_id(0), None);
        assert_eq!(ButtonId::from_id(200), None);
    }

    #[test]
    fn labels_follow_the_table() {
        assert_eq!(ButtonId::NewDownload.label(&EN), "New download");
        assert_eq!(ButtonId::NewDownload.label(&RU), "Новая загрузка");
    }
}
