//! Transcript — the ordered, append-only history of commands and their output.

/// One submitted command and the text it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub command: String,
    /// Markdown source of the answer.
    pub output: String,
}

impl CommandEntry {
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
        }
    }
}

/// Entries in chronological order. Only appended to or cleared, never edited.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<CommandEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its index.
    pub fn push(&mut self, entry: CommandEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&CommandEntry> {
        self.entries.get(index)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&CommandEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
