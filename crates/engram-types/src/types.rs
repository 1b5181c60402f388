use serde::{Deserialize, Serialize};

/// A single vocabulary entry. Identity is its position in the word list;
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub headword: String,
    pub phonetics: String,
    pub definition: String,
}

impl WordRecord {
    pub fn new(
        headword: impl Into<String>,
        phonetics: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            headword: headword.into(),
            phonetics: phonetics.into(),
            definition: definition.into(),
        }
    }
}

/// Interaction modes offered by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyMode {
    /// Linear traversal of the word list, cursor persisted across sessions.
    #[default]
    Sequential,
    /// Random card showing the headword first, definition on reveal.
    WordToDefinition,
    /// Random card showing the definition first, headword on reveal.
    DefinitionToWord,
    /// Type the headword given phonetics and definition.
    Spelling,
}

impl StudyMode {
    pub fn label(self) -> &'static str {
        match self {
            StudyMode::Sequential => "Sequential",
            StudyMode::WordToDefinition => "Word -> Definition",
            StudyMode::DefinitionToWord => "Definition -> Word",
            StudyMode::Spelling => "Spelling Test",
        }
    }
}
