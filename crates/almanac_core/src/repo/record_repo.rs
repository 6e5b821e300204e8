//! Record sink contract and SQLite implementation.
//!
//! # Responsibility
//! - Store events in `event` and people in `birth` / `death`.
//! - Purge placeholder header rows after ingest.
//! - Read records back in chronological (Julian day) order.
//!
//! # Invariants
//! - `date` holds the signed `YYYYMMDD` storage key, `date_julian` the
//!   fractional Julian day.
//! - A group written through `accept_group` lands atomically.

use crate::db::DbError;
use crate::model::record::{
    NormalizedDate, NormalizedRecord, OccurrenceType, PLACEHOLDER_DESCRIPTION,
};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for record persistence and read-back.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Destination for normalized records.
pub trait RecordSink {
    fn accept(&mut self, record: &NormalizedRecord) -> RepoResult<()>;

    /// Stores one assembled group and returns the number of records written.
    fn accept_group(&mut self, records: &[NormalizedRecord]) -> RepoResult<usize> {
        for record in records {
            self.accept(record)?;
        }
        Ok(records.len())
    }

    /// Removes placeholder rows produced for section headers.
    fn purge_placeholders(&mut self) -> RepoResult<usize>;
}

/// Whether a record is a placeholder for a header line.
///
/// Events keep the placeholder in their description; for people it ends up
/// as the name once the remainder has been split.
pub fn is_placeholder(record: &NormalizedRecord) -> bool {
    match record.name() {
        Some(name) => name == PLACEHOLDER_DESCRIPTION,
        None => record.description() == PLACEHOLDER_DESCRIPTION,
    }
}

impl RecordSink for Vec<NormalizedRecord> {
    fn accept(&mut self, record: &NormalizedRecord) -> RepoResult<()> {
        self.push(record.clone());
        Ok(())
    }

    fn purge_placeholders(&mut self) -> RepoResult<usize> {
        let before = self.len();
        self.retain(|record| !is_placeholder(record));
        Ok(before - self.len())
    }
}

/// SQLite-backed record store.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists records of one type ordered by `date_julian ASC, id ASC`.
    pub fn list_chronological(
        &self,
        kind: OccurrenceType,
        limit: Option<u32>,
    ) -> RepoResult<Vec<NormalizedRecord>> {
        let columns = match kind {
            OccurrenceType::Event => "date, date_julian, event_description",
            OccurrenceType::Birth | OccurrenceType::Death => {
                "date, date_julian, name, person_description"
            }
        };
        let sql = format!(
            "SELECT {columns} FROM {} ORDER BY date_julian ASC, id ASC LIMIT ?1;",
            table_name(kind)
        );
        // SQLite treats a negative LIMIT as unbounded.
        let limit = limit.map_or(-1, i64::from);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([limit])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_record_row(kind, row)?);
        }
        Ok(records)
    }

    pub fn count(&self, kind: OccurrenceType) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {};", table_name(kind)),
            [],
            |row| row.get(0),
        )?;
        u64::try_from(count).map_err(|_| RepoError::InvalidData(format!("negative count {count}")))
    }
}

impl RecordSink for SqliteRecordRepository<'_> {
    fn accept(&mut self, record: &NormalizedRecord) -> RepoResult<()> {
        insert_record(self.conn, record)
    }

    fn accept_group(&mut self, records: &[NormalizedRecord]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        for record in records {
            insert_record(&tx, record)?;
        }
        tx.commit()?;
        Ok(records.len())
    }

    fn purge_placeholders(&mut self) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut removed = tx.execute(
            "DELETE FROM event WHERE event_description = ?1;",
            [PLACEHOLDER_DESCRIPTION],
        )?;
        for kind in [OccurrenceType::Birth, OccurrenceType::Death] {
            removed += tx.execute(
                &format!("DELETE FROM {} WHERE name = ?1;", table_name(kind)),
                [PLACEHOLDER_DESCRIPTION],
            )?;
        }
        tx.commit()?;
        Ok(removed)
    }
}

fn insert_record(conn: &Connection, record: &NormalizedRecord) -> RepoResult<()> {
    let date = record.date();
    match record {
        NormalizedRecord::Event { description, .. } => {
            conn.execute(
                "INSERT INTO event (date, date_julian, event_description)
                 VALUES (?1, ?2, ?3);",
                params![date.storage_key(), date.julian_day, description],
            )?;
        }
        NormalizedRecord::Birth {
            name, description, ..
        }
        | NormalizedRecord::Death {
            name, description, ..
        } => {
            conn.execute(
                &format!(
                    "INSERT INTO {} (date, date_julian, name, person_description)
                     VALUES (?1, ?2, ?3, ?4);",
                    table_name(record.kind())
                ),
                params![date.storage_key(), date.julian_day, name, description],
            )?;
        }
    }
    Ok(())
}

fn parse_record_row(kind: OccurrenceType, row: &Row<'_>) -> RepoResult<NormalizedRecord> {
    let key: i64 = row.get("date")?;
    let julian_day: f64 = row.get("date_julian")?;
    let date = NormalizedDate::from_storage(key, julian_day).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid date key `{key}` in {}.date",
            table_name(kind)
        ))
    })?;

    let record = match kind {
        OccurrenceType::Event => NormalizedRecord::Event {
            date,
            description: row.get("event_description")?,
        },
        OccurrenceType::Birth | OccurrenceType::Death => {
            let name: Option<String> = row.get("name")?;
            let description: Option<String> = row.get("person_description")?;
            let name = name.unwrap_or_default();
            let description = description.unwrap_or_default();
            if kind == OccurrenceType::Birth {
                NormalizedRecord::Birth {
                    date,
                    name,
                    description,
                }
            } else {
                NormalizedRecord::Death {
                    date,
                    name,
                    description,
                }
            }
        }
    };
    Ok(record)
}

fn table_name(kind: OccurrenceType) -> &'static str {
    match kind {
        OccurrenceType::Event => "event",
        OccurrenceType::Birth => "birth",
        OccurrenceType::Death => "death",
    }
}

#[cfg(test)]
mod tests {
    use super::{is_placeholder, RecordSink};
    use crate::model::record::{NormalizedDate, NormalizedRecord};

    fn date() -> NormalizedDate {
        NormalizedDate {
            year: 1600,
            month: 1,
            day: 1,
            julian_day: 2_305_447.5,
        }
    }

    #[test]
    fn placeholder_detection_depends_on_shape() {
        let event = NormalizedRecord::Event {
            date: date(),
            description: "dummy".to_string(),
        };
        let birth = NormalizedRecord::Birth {
            date: date(),
            name: "dummy".to_string(),
            description: "not described".to_string(),
        };
        let real = NormalizedRecord::Birth {
            date: date(),
            name: "Jane Doe".to_string(),
            description: "dummy".to_string(),
        };
        assert!(is_placeholder(&event));
        assert!(is_placeholder(&birth));
        assert!(!is_placeholder(&real));
    }

    #[test]
    fn vec_sink_purges_placeholders() {
        let mut sink: Vec<NormalizedRecord> = Vec::new();
        sink.accept_group(&[
            NormalizedRecord::Event {
                date: date(),
                description: "dummy".to_string(),
            },
            NormalizedRecord::Event {
                date: date(),
                description: "Something happened.".to_string(),
            },
        ])
        .expect("vec sink never fails");

        assert_eq!(sink.purge_placeholders().expect("vec sink never fails"), 1);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].description(), "Something happened.");
    }
}
