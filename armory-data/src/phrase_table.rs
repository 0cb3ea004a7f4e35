use crate::StatKey;

#[derive(Clone, Debug)]
pub struct PhraseEntry {
    pub phrase: &'static str,
    pub key: StatKey,
}

/// Ordered table of literal game-client phrases. The first phrase found
/// as a substring of a description wins, so more specific phrases must
/// be listed before the more general ones they contain.
pub struct PhraseTable {
    entries: Vec<PhraseEntry>,
}

impl PhraseTable {
    pub fn new(entries: Vec<PhraseEntry>) -> Self {
        Self { entries }
    }

    pub fn classify(&self, fragment: &str) -> Option<StatKey> {
        self.entries
            .iter()
            .find(|entry| fragment.contains(entry.phrase))
            .map(|entry| entry.key)
    }

    /// Entries which can never match because an earlier entry's phrase
    /// is a substring of theirs, as (shadowed, blocking) pairs.
    pub fn shadowed_entries(&self) -> Vec<(&PhraseEntry, &PhraseEntry)> {
        let mut shadowed = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if let Some(blocking) = self.entries[..index]
                .iter()
                .find(|earlier| entry.phrase.contains(earlier.phrase))
            {
                shadowed.push((entry, blocking));
            }
        }

        shadowed
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
