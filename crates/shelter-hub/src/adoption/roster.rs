use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One pet from a shelter roster export: `name,age` with a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub age: u8,
}

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    BlankName { row: usize },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::BlankName { row } => {
                write!(f, "roster row {} has a blank pet name", row)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::BlankName { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct PetRosterImporter;

impl PetRosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = record?;
            if row.name.is_empty() {
                // Data rows start on line two, after the header.
                return Err(RosterImportError::BlankName { row: index + 2 });
            }

            entries.push(RosterEntry {
                name: row.name,
                age: row.age,
            });
        }

        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    age: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_parses_rows_in_file_order() {
        let entries = PetRosterImporter::from_reader(Cursor::new(
            "name,age\nRex,4\nWhiskers of Doom,2\n",
        ))
        .expect("parse roster");

        assert_eq!(
            entries,
            vec![
                RosterEntry {
                    name: "Rex".to_string(),
                    age: 4,
                },
                RosterEntry {
                    name: "Whiskers of Doom".to_string(),
                    age: 2,
                },
            ]
        );
    }

    #[test]
    fn reader_trims_surrounding_whitespace() {
        let entries = PetRosterImporter::from_reader(Cursor::new("name,age\n  Rex  , 4 \n"))
            .expect("parse roster");

        assert_eq!(entries[0].name, "Rex");
        assert_eq!(entries[0].age, 4);
    }

    #[test]
    fn reader_rejects_blank_names_with_the_offending_row() {
        let error = PetRosterImporter::from_reader(Cursor::new("name,age\nRex,4\n   ,2\n"))
            .expect_err("expected blank name error");

        match error {
            RosterImportError::BlankName { row } => assert_eq!(row, 3),
            other => panic!("expected blank name error, got {other:?}"),
        }
    }

    #[test]
    fn reader_rejects_non_numeric_ages() {
        let error = PetRosterImporter::from_reader(Cursor::new("name,age\nRex,old\n"))
            .expect_err("expected csv error");

        match error {
            RosterImportError::Csv(_) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = PetRosterImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            RosterImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
