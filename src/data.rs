// src/data.rs
//
// Attendance data as received from the sheet, plus the derived student index.
//
// - AttendanceDataset: subject -> records. Replaced wholesale on every fetch,
//                      read-only afterwards.
// - AttendanceRecord:  one loosely-typed row; every field may be missing.
// - StudentIndex:      unique student names across all subjects, used for
//                      search suggestions only.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One attendance entry. Spreadsheet cells come through with whatever JSON
/// type the sheet picked, so text fields also accept numbers and booleans.
/// `null` and empty strings are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "Student Name", default, deserialize_with = "lenient_text")]
    pub student_name: Option<String>,

    #[serde(rename = "Roll no", default, deserialize_with = "lenient_text")]
    pub roll_no: Option<String>,

    #[serde(rename = "Date", default, deserialize_with = "lenient_text")]
    pub date: Option<String>,

    #[serde(rename = "Time", default, deserialize_with = "lenient_text")]
    pub time: Option<String>,

    /// Fraction in [0, 1]
    #[serde(rename = "Attendance (%)", default, deserialize_with = "lenient_fraction")]
    pub attendance: Option<f64>,
}

impl AttendanceRecord {
    pub fn name(&self) -> Option<&str> {
        self.student_name.as_deref()
    }

    /// Case-insensitive substring match on the student name.
    /// `needle_lc` must already be lowercased. Nameless records never match.
    pub fn name_contains_lc(&self, needle_lc: &str) -> bool {
        self.name()
            .map(|n| n.to_lowercase().contains(needle_lc))
            .unwrap_or(false)
    }
}

fn lenient_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_fraction<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

/// Subject name -> ordered records.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AttendanceDataset {
    subjects: BTreeMap<String, Vec<AttendanceRecord>>,
}

impl AttendanceDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_subjects(subjects: BTreeMap<String, Vec<AttendanceRecord>>) -> Self {
        Self { subjects }
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn record_count(&self) -> usize {
        self.subjects.values().map(Vec::len).sum()
    }

    /// Guarded lookup; a missing subject is a normal outcome.
    pub fn records(&self, subject: &str) -> Option<&[AttendanceRecord]> {
        self.subjects.get(subject).map(Vec::as_slice)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AttendanceRecord])> {
        self.subjects.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Unique student names across every subject, first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentIndex {
    names: Vec<String>,
}

impl StudentIndex {
    pub fn build(ds: &AttendanceDataset) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut names = Vec::new();

        for (_, records) in ds.iter() {
            for name in records.iter().filter_map(AttendanceRecord::name) {
                if seen.insert(name) {
                    names.push(s!(name));
                }
            }
        }
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Up to `limit` names containing `query` (case-insensitive).
    /// An exact (case-insensitive) match is not suggested back to the user.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let q = query.to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.names
            .iter()
            .filter(|n| {
                let lc = n.to_lowercase();
                lc.contains(&q) && lc != q
            })
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_cells_are_normalized() {
        let rec: AttendanceRecord = serde_json::from_str(
            r#"{"Student Name":"","Roll no":12,"Date":null,"Attendance (%)":"0.5","Extra":1}"#,
        )
        .unwrap();
        assert_eq!(rec.student_name, None);
        assert_eq!(rec.roll_no.as_deref(), Some("12"));
        assert_eq!(rec.date, None);
        assert_eq!(rec.time, None);
        assert_eq!(rec.attendance, Some(0.5));
    }

    #[test]
    fn non_numeric_attendance_is_absent() {
        let rec: AttendanceRecord =
            serde_json::from_str(r#"{"Attendance (%)":"soon"}"#).unwrap();
        assert_eq!(rec.attendance, None);
    }
}
