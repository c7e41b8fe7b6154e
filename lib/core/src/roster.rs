use std::io::Read;
use std::path::Path;

use ahash::AHashMap;
use csv::ReaderBuilder;

use crate::error::{Error, Result};
use crate::record::{normalize, HeroRecord};
use crate::vector::{FEATURE_COLUMNS, FEATURE_DIM};

/// Header columns every dataset must carry, besides the feature columns.
const NAME_COLUMN: &str = "hero_name";
const ROLE_COLUMN: &str = "role";

/// The in-memory hero dataset.
///
/// Built once at startup from a header CSV and immutable afterwards: no
/// update or delete operations exist, so a `Roster` can be shared across
/// threads without synchronization. Records keep their source row order,
/// which downstream ranking relies on for tie-breaks.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<HeroRecord>,
    by_name: AHashMap<String, usize>,
}

impl Roster {
    /// Load a roster from a CSV file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Roster> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| Error::DataLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(file)
    }

    /// Load a roster from any CSV source with a header row.
    ///
    /// Column names and cells are trimmed; `hero_name` and `role` values
    /// are lowercased; blank or unparseable numeric cells become 0.0.
    /// Columns beyond the required set are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Roster> {
        let mut csv = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv.headers()?.clone();
        let column_of = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };

        let name_col = column_of(NAME_COLUMN)?;
        let role_col = column_of(ROLE_COLUMN)?;
        let mut feature_cols = [0usize; FEATURE_DIM];
        for (slot, column) in feature_cols.iter_mut().zip(FEATURE_COLUMNS) {
            *slot = column_of(column)?;
        }

        let mut roster = Roster {
            records: Vec::new(),
            by_name: AHashMap::new(),
        };

        for row in csv.records() {
            let row = row?;
            let mut stats = [0.0f64; FEATURE_DIM];
            for (value, col) in stats.iter_mut().zip(feature_cols) {
                *value = row.get(col).and_then(|c| c.parse().ok()).unwrap_or(0.0);
            }
            let name = row.get(name_col).unwrap_or_default();
            let role = row.get(role_col).unwrap_or_default();
            roster.insert(HeroRecord::new(name, role, stats));
        }

        if roster.records.is_empty() {
            return Err(Error::DataLoad(
                "dataset contains no data rows".to_string(),
            ));
        }

        Ok(roster)
    }

    /// Build a roster from already-constructed records, applying the same
    /// normalization and duplicate handling as the CSV loader.
    #[must_use]
    pub fn from_records(records: Vec<HeroRecord>) -> Roster {
        let mut roster = Roster {
            records: Vec::with_capacity(records.len()),
            by_name: AHashMap::with_capacity(records.len()),
        };
        for mut record in records {
            record.name = normalize(&record.name);
            record.role = normalize(&record.role);
            roster.insert(record);
        }
        roster
    }

    // Duplicate names after normalization are last-wins: the later record
    // replaces the earlier one at the earlier row's position, keeping the
    // unique-name invariant and the row order stable.
    fn insert(&mut self, record: HeroRecord) {
        match self.by_name.get(&record.name) {
            Some(&row) => self.records[row] = record,
            None => {
                self.by_name.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a hero by name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Result<&HeroRecord> {
        self.get(name)
            .ok_or_else(|| Error::HeroNotFound(normalize(name)))
    }

    /// Non-failing variant of [`find_by_name`](Self::find_by_name).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HeroRecord> {
        self.row_of(name).map(|row| &self.records[row])
    }

    /// Source row index of a hero, if present.
    #[must_use]
    pub fn row_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(&normalize(name)).copied()
    }

    /// All heroes whose role is in `roles`, in source row order.
    #[must_use]
    pub fn filter_by_roles(&self, roles: &[&str]) -> Vec<&HeroRecord> {
        let roles: Vec<String> = roles.iter().map(|r| normalize(r)).collect();
        self.records
            .iter()
            .filter(|record| roles.iter().any(|r| *r == record.role))
            .collect()
    }

    /// All heroes in source row order.
    #[must_use]
    pub fn all(&self) -> &[HeroRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
