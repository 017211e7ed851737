//! Record source: JSON ingestion of personnel availability.
//!
//! Raw records arrive as loosely typed JSON (times as `"10:00:00Z"`
//! strings, numbers that may be ints or floats). They are converted once,
//! at this boundary, into [`PersonnelRecord`]s with times in seconds since
//! midnight. Nothing untyped travels further.
//!
//! # Format
//!
//! ```json
//! [
//!   {
//!     "id": 6, "storelabel": "kadikoy",
//!     "openingtime": "10:00:00Z", "closingtime": "21:00:00Z",
//!     "personnelname": "Ayse Yilmaz", "username": "ayse",
//!     "income": 684.10, "invoicecount": 18, "workinghours": 5.0,
//!     "expense": 191.10, "days": 6,
//!     "starttime": "10:00:00Z", "endtime": "15:00:00Z",
//!     "simultaneouspersonnel": 2
//!   }
//! ]
//! ```

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ShiftError, ShiftResult};
use crate::models::{Candidate, Day, StoreWindow};
use crate::scoring::ScoringProvider;

/// Seconds in an hour.
const HOUR: i64 = 3600;

/// `24:00`, accepted as a closing time.
pub const END_OF_DAY: i64 = 24 * HOUR;

/// One personnel availability record, fully typed.
///
/// Times are seconds since midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelRecord {
    pub id: i64,
    pub store_label: String,
    pub personnel_name: String,
    pub user_name: String,
    pub income: f64,
    pub invoice_count: f64,
    /// Declared working hours (hours, not seconds).
    pub working_hours: f64,
    pub expense: f64,
    pub day: Day,
    pub opening_time: i64,
    pub closing_time: i64,
    pub start_time: i64,
    pub end_time: i64,
    pub simultaneous_personnel: i64,
    /// Score attached upstream, if any.
    pub score: Option<f64>,
}

/// Wire shape of a record.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    storelabel: String,
    #[serde(default)]
    personnelname: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    income: f64,
    #[serde(default)]
    invoicecount: f64,
    #[serde(default)]
    workinghours: f64,
    #[serde(default)]
    expense: f64,
    days: i32,
    openingtime: String,
    closingtime: String,
    starttime: String,
    endtime: String,
    #[serde(default)]
    simultaneouspersonnel: i64,
    #[serde(default)]
    score: Option<f64>,
}

impl TryFrom<RawRecord> for PersonnelRecord {
    type Error = ShiftError;

    fn try_from(raw: RawRecord) -> ShiftResult<Self> {
        Ok(Self {
            id: raw.id,
            store_label: raw.storelabel,
            personnel_name: raw.personnelname,
            user_name: raw.username,
            income: raw.income,
            invoice_count: raw.invoicecount,
            working_hours: raw.workinghours,
            expense: raw.expense,
            day: Day::from_index(raw.days),
            opening_time: parse_time_of_day(&raw.openingtime)?,
            closing_time: parse_time_of_day(&raw.closingtime)?,
            start_time: parse_time_of_day(&raw.starttime)?,
            end_time: parse_time_of_day(&raw.endtime)?,
            simultaneous_personnel: raw.simultaneouspersonnel,
            score: raw.score,
        })
    }
}

impl PersonnelRecord {
    /// Identity used on shifts: the user name, or the personnel name if
    /// no user name was exported.
    pub fn identity(&self) -> &str {
        if self.user_name.trim().is_empty() {
            &self.personnel_name
        } else {
            &self.user_name
        }
    }

    /// Store hours this record was exported with.
    pub fn store_window(&self) -> StoreWindow {
        StoreWindow::new(self.opening_time, self.closing_time)
    }

    /// Declared working hours converted to seconds.
    pub fn working_time(&self) -> i64 {
        (self.working_hours * HOUR as f64).round() as i64
    }

    /// Builds the scored candidate for this record.
    pub fn to_candidate(&self, score: f64) -> Candidate {
        Candidate::new(self.identity(), self.day, self.start_time, self.end_time)
            .with_score(score)
            .with_working_time(self.working_time())
    }
}

/// Parses a time of day into seconds since midnight.
///
/// Accepts `HH:MM` and `HH:MM:SS`, with an optional trailing `Z`.
/// `24:00` is accepted as end of day.
pub fn parse_time_of_day(value: &str) -> ShiftResult<i64> {
    let fail = |reason: String| ShiftError::TimeOfDay {
        value: value.to_string(),
        reason,
    };

    let trimmed = value.trim();
    let body = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    if body == "24:00" || body == "24:00:00" {
        return Ok(END_OF_DAY);
    }

    let time = NaiveTime::parse_from_str(body, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(body, "%H:%M"))
        .map_err(|e| fail(e.to_string()))?;
    // %S accepts a leap second (":60").
    if time.nanosecond() != 0 {
        return Err(fail("leap seconds are not supported".to_string()));
    }
    Ok(i64::from(time.num_seconds_from_midnight()))
}

/// Parsed records of one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct RecordSource {
    records: Vec<PersonnelRecord>,
}

impl RecordSource {
    /// Wraps already-typed records.
    pub fn from_records(records: Vec<PersonnelRecord>) -> Self {
        Self { records }
    }

    /// Parses a JSON array of raw records.
    pub fn from_json(json: &str) -> ShiftResult<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .map(PersonnelRecord::try_from)
            .collect::<ShiftResult<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PersonnelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The single store window shared by every record.
    ///
    /// # Errors
    /// [`ShiftError::NoRecords`] for an empty source,
    /// [`ShiftError::MixedStoreWindows`] if two records disagree.
    pub fn store_window(&self) -> ShiftResult<StoreWindow> {
        let first = self.records.first().ok_or(ShiftError::NoRecords)?;
        let window = first.store_window();
        if let Some(other) = self.records.iter().find(|r| r.store_window() != window) {
            return Err(ShiftError::MixedStoreWindows(format!(
                "record {} has {}..{}, record {} has {}..{}",
                first.id,
                window.opening,
                window.closing,
                other.id,
                other.opening_time,
                other.closing_time
            )));
        }
        Ok(window)
    }

    /// Scores every record and converts it into a candidate, in input order.
    pub fn candidates(&self, scorer: &dyn ScoringProvider) -> Vec<Candidate> {
        self.records
            .iter()
            .map(|r| r.to_candidate(scorer.score(r)))
            .collect()
    }
}
