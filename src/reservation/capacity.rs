/// One selectable accommodation with its occupancy ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityEntry {
    pub id: String,
    pub label: String,
    pub max_persons: u32,
}

/// Accommodation → capacity lookup. Kept as data so a new rental unit is a
/// new entry, not a new validation branch. An id missing from the table
/// imposes no ceiling.
#[derive(Debug, Clone)]
pub struct CapacityTable {
    entries: Vec<CapacityEntry>,
}

impl CapacityTable {
    pub fn new(entries: Vec<CapacityEntry>) -> Self {
        Self { entries }
    }

    /// The site's rental units.
    pub fn standard() -> Self {
        Self::new(vec![
            CapacityEntry {
                id: "chata1".to_string(),
                label: "Chata 1".to_string(),
                max_persons: 6,
            },
            CapacityEntry {
                id: "chata2".to_string(),
                label: "Chata 2".to_string(),
                max_persons: 4,
            },
            CapacityEntry {
                id: "spolocenska".to_string(),
                label: "Spoločenská miestnosť".to_string(),
                max_persons: 30,
            },
        ])
    }

    pub fn lookup(&self, id: &str) -> Option<&CapacityEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All entries, for rendering the accommodation select.
    pub fn entries(&self) -> &[CapacityEntry] {
        &self.entries
    }
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self::standard()
    }
}
