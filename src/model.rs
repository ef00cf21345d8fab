//! Student records and the roster they live in.
//!
//! The roster is built once at startup and never mutated afterwards.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Subjects shown in every "Пересдачи" block unless configured otherwise.
pub const DEFAULT_RETAKE_SUBJECTS: [&str; 4] = [
    "Дискретная математика",
    "Сети",
    "История",
    "Информатика",
];

/// Explicit student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single student. Immutable once the roster is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub group: String,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group: group.into(),
        }
    }

    /// Text block shown on both the list card and the detail page
    pub fn summary_lines(&self) -> [String; 2] {
        [format!("ФИО: {}", self.name), format!("Группа: {}", self.group)]
    }
}

/// Student entry as written in the config file. The id is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub group: String,
}

impl StudentEntry {
    pub fn new(name: &str, group: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            group: group.to_string(),
        }
    }
}

/// All students plus the retake subjects shared by every student.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    retake_subjects: Vec<String>,
}

impl Roster {
    /// Build a roster from already-identified students.
    pub fn new(students: Vec<Student>, retake_subjects: Vec<String>) -> Self {
        Self {
            students,
            retake_subjects,
        }
    }

    /// Build a roster from config entries.
    ///
    /// Entries without an id get one assigned sequentially after the
    /// largest explicit id. Duplicate explicit ids are rejected.
    pub fn from_entries(entries: &[StudentEntry], retake_subjects: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        for id in entries.iter().filter_map(|e| e.id) {
            if !seen.insert(id) {
                bail!("Duplicate student id {} in roster", id);
            }
        }

        // `None` once the id space is exhausted
        let mut next_id = seen.iter().max().map_or(Some(1), |max| max.checked_add(1));
        let mut students = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = match entry.id {
                Some(id) => id,
                None => {
                    let Some(id) = next_id else {
                        bail!("No free student id left for {:?}", entry.name);
                    };
                    next_id = id.checked_add(1);
                    id
                }
            };
            students.push(Student::new(StudentId(id), entry.name.clone(), entry.group.clone()));
        }

        let roster = Self::new(students, retake_subjects);
        for (name, group) in roster.collisions() {
            tracing::warn!(
                "Students share name {:?} and group {:?}; name/group routes resolve to the first one",
                name,
                group
            );
        }
        Ok(roster)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn retake_subjects(&self) -> &[String] {
        &self.retake_subjects
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    /// Linear scan for an exact match on both fields. First match wins.
    pub fn find_by_name_group(&self, name: &str, group: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|s| s.name == name && s.group == group)
    }

    pub fn find_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Whether another student shares this student's (name, group) pair
    pub fn has_collision(&self, student: &Student) -> bool {
        self.students
            .iter()
            .any(|s| s.id != student.id && s.name == student.name && s.group == student.group)
    }

    /// (name, group) pairs that appear more than once, in roster order
    pub fn collisions(&self) -> Vec<(&str, &str)> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut out = Vec::new();
        for s in &self.students {
            let key = (s.name.as_str(), s.group.as_str());
            if !seen.insert(key) && reported.insert(key) {
                out.push(key);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects() -> Vec<String> {
        DEFAULT_RETAKE_SUBJECTS.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Roster {
        Roster::from_entries(
            &[
                StudentEntry::new("Ivan Petrov", "G101"),
                StudentEntry::new("Anna Smirnova", "G102"),
            ],
            subjects(),
        )
        .unwrap()
    }

    #[test]
    fn test_ids_assigned_sequentially() {
        let roster = sample();
        assert_eq!(roster.students()[0].id, StudentId(1));
        assert_eq!(roster.students()[1].id, StudentId(2));
    }

    #[test]
    fn test_ids_continue_after_largest_explicit() {
        let mut explicit = StudentEntry::new("A", "G1");
        explicit.id = Some(10);
        let roster =
            Roster::from_entries(&[StudentEntry::new("B", "G2"), explicit], subjects()).unwrap();
        assert_eq!(roster.students()[0].id, StudentId(11));
        assert_eq!(roster.students()[1].id, StudentId(10));
    }

    #[test]
    fn test_max_explicit_id_alone_is_accepted() {
        let mut last = StudentEntry::new("A", "G1");
        last.id = Some(u32::MAX);
        let roster = Roster::from_entries(&[last], subjects()).unwrap();
        assert_eq!(roster.students()[0].id, StudentId(u32::MAX));
    }

    #[test]
    fn test_no_free_id_after_max_explicit_id() {
        let mut last = StudentEntry::new("A", "G1");
        last.id = Some(u32::MAX);
        let err = Roster::from_entries(&[last, StudentEntry::new("B", "G2")], subjects())
            .unwrap_err();
        assert!(err.to_string().contains("No free student id"));
    }

    #[test]
    fn test_assigned_ids_stop_at_max() {
        let mut near = StudentEntry::new("A", "G1");
        near.id = Some(u32::MAX - 1);
        let roster =
            Roster::from_entries(&[near.clone(), StudentEntry::new("B", "G2")], subjects())
                .unwrap();
        assert_eq!(roster.students()[1].id, StudentId(u32::MAX));

        let crowded = [near, StudentEntry::new("B", "G2"), StudentEntry::new("C", "G3")];
        assert!(Roster::from_entries(&crowded, subjects()).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut a = StudentEntry::new("A", "G1");
        a.id = Some(3);
        let mut b = StudentEntry::new("B", "G2");
        b.id = Some(3);
        let err = Roster::from_entries(&[a, b], subjects()).unwrap_err();
        assert!(err.to_string().contains("Duplicate student id 3"));
    }

    #[test]
    fn test_find_by_name_group() {
        let roster = sample();
        let found = roster.find_by_name_group("Anna Smirnova", "G102").unwrap();
        assert_eq!(found.id, StudentId(2));
        assert!(roster.find_by_name_group("Anna Smirnova", "G101").is_none());
        assert!(roster.find_by_name_group("Unknown", "G999").is_none());
    }

    #[test]
    fn test_collision_first_match_wins() {
        let roster = Roster::from_entries(
            &[
                StudentEntry::new("Same", "G1"),
                StudentEntry::new("Other", "G1"),
                StudentEntry::new("Same", "G1"),
            ],
            subjects(),
        )
        .unwrap();
        assert_eq!(
            roster.find_by_name_group("Same", "G1").unwrap().id,
            StudentId(1)
        );
        assert_eq!(roster.collisions(), vec![("Same", "G1")]);
        assert!(roster.has_collision(&roster.students()[2]));
        assert!(!roster.has_collision(&roster.students()[1]));
        assert_eq!(roster.find_by_id(StudentId(3)).unwrap().name, "Same");
    }

    #[test]
    fn test_summary_lines() {
        let student = Student::new(StudentId(1), "Anna Smirnova", "G102");
        assert_eq!(
            student.summary_lines(),
            ["ФИО: Anna Smirnova".to_string(), "Группа: G102".to_string()]
        );
    }
}
