//! Flat records and the reports that group them.
//!
//! A [`Report`] is an ordered list of [`FlatRecord`]s that all share one
//! declared field list. Records are checked against that list when they are
//! added, so the writers in [`crate::export`] never have to guess a schema.

pub mod builder;


use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{FflError, Result};

pub use builder::{build_report, Column};

/// A single exported value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            // Keep a fractional digit so 100.0 does not turn into an integer column.
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Scalar::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Scalar {
            fn from(value: $t) -> Self {
                Scalar::Int(i64::from(value))
            }
        })*
    };
}

scalar_from_int!(i64, i32, u32, u16, u8);

/// One exported row/object: field names paired with values, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatRecord {
    fields: Vec<(String, Scalar)>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Scalar> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FlatRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = FlatRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<FlatRecord, A::Error> {
                let mut record = FlatRecord::new();
                while let Some((k, v)) = access.next_entry::<String, Scalar>()? {
                    record.fields.push((k, v));
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// The seven kinds of exported league data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Standings,
    Rosters,
    Matchups,
    WaiverWire,
    Transactions,
    MatchupSchedule,
    GameLogs,
}

impl ReportKind {
    /// Every kind, in the order `--export-all` produces them.
    pub const ALL: [ReportKind; 7] = [
        ReportKind::Standings,
        ReportKind::Rosters,
        ReportKind::Matchups,
        ReportKind::WaiverWire,
        ReportKind::Transactions,
        ReportKind::MatchupSchedule,
        ReportKind::GameLogs,
    ];

    /// File stem of the exported artifact.
    pub fn base_name(&self) -> &'static str {
        match self {
            ReportKind::Standings => "standings",
            ReportKind::Rosters => "rosters",
            ReportKind::Matchups => "matchups",
            ReportKind::WaiverWire => "waiver_wire",
            ReportKind::Transactions => "transactions",
            ReportKind::MatchupSchedule => "matchup_schedule",
            ReportKind::GameLogs => "game_logs",
        }
    }

    /// Human-readable name for progress output.
    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Standings => "league standings",
            ReportKind::Rosters => "rosters",
            ReportKind::Matchups => "current matchups",
            ReportKind::WaiverWire => "waiver wire data",
            ReportKind::Transactions => "transaction history",
            ReportKind::MatchupSchedule => "matchup schedule",
            ReportKind::GameLogs => "player game logs",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_name())
    }
}

/// An ordered set of records sharing one declared schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    name: String,
    fields: Vec<String>,
    records: Vec<FlatRecord>,
}

impl Report {
    /// Create an empty report with a declared field list.
    ///
    /// Fails on an empty base name, an empty field list or duplicate fields.
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FflError::InvalidReport {
                message: "report base name is empty".to_string(),
            });
        }

        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(FflError::InvalidReport {
                message: format!("report '{}' declares no fields", name),
            });
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                return Err(FflError::InvalidReport {
                    message: format!("report '{}' declares field '{}' twice", name, field),
                });
            }
        }

        Ok(Self {
            name,
            fields,
            records: Vec::new(),
        })
    }

    /// Create a report and validate every record against `fields`.
    pub fn with_records<I, S>(
        name: impl Into<String>,
        fields: I,
        records: impl IntoIterator<Item = FlatRecord>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut report = Self::new(name, fields)?;
        for record in records {
            report.push(record)?;
        }
        Ok(report)
    }

    /// Append a record; it must carry exactly the declared fields in order.
    pub fn push(&mut self, record: FlatRecord) -> Result<()> {
        if !record.keys().eq(self.fields.iter().map(String::as_str)) {
            return Err(FflError::SchemaMismatch {
                report: self.name.clone(),
                index: self.records.len(),
                expected: self.fields.clone(),
                found: record.keys().map(str::to_string).collect(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn records(&self) -> &[FlatRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
