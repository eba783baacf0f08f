//! Comparator-based sorting for entity lists.
//!
//! Sorting always goes through the standard library's stable `sort_by`,
//! so ties retain their incoming relative order — repeated sorts of
//! identical data must not reshuffle rows. Missing fields compare as
//! empty string / zero rather than failing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use campus_core::entities::{Grade, Module, Registration, Student};

/// User-selectable sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    CodeAsc,
    CodeDesc,
    IdAsc,
    ScoreAsc,
    ScoreDesc,
}

impl SortKey {
    /// CLI spelling of the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name",
            Self::NameDesc => "name-desc",
            Self::CodeAsc => "code",
            Self::CodeDesc => "code-desc",
            Self::IdAsc => "id",
            Self::ScoreAsc => "score",
            Self::ScoreDesc => "score-desc",
        }
    }

    /// All accepted spellings, for error messages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::NameAsc,
            Self::NameDesc,
            Self::CodeAsc,
            Self::CodeDesc,
            Self::IdAsc,
            Self::ScoreAsc,
            Self::ScoreDesc,
        ]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Self::all().iter().map(|k| k.as_str()).collect();
                format!("unknown sort key '{value}' (accepted: {})", accepted.join(", "))
            })
    }
}

/// Comparable fields of an entity. Entities without a field fall back to
/// the neutral value, so any key can be applied to any list.
pub trait SortFields {
    fn name_field(&self) -> String {
        String::new()
    }
    fn code_field(&self) -> String {
        String::new()
    }
    fn id_field(&self) -> i64 {
        0
    }
    fn score_field(&self) -> f64 {
        0.0
    }
}

impl SortFields for Student {
    fn name_field(&self) -> String {
        self.full_name()
    }
    fn id_field(&self) -> i64 {
        self.id.unwrap_or_default()
    }
}

impl SortFields for Module {
    fn name_field(&self) -> String {
        self.name.clone()
    }
    fn code_field(&self) -> String {
        self.code.clone()
    }
    fn id_field(&self) -> i64 {
        self.id.unwrap_or_default()
    }
}

impl SortFields for Grade {
    fn name_field(&self) -> String {
        self.student
            .as_ref()
            .map(Student::full_name)
            .unwrap_or_default()
    }
    fn code_field(&self) -> String {
        self.module
            .as_ref()
            .map(|module| module.code.clone())
            .unwrap_or_default()
    }
    fn id_field(&self) -> i64 {
        self.id.unwrap_or_default()
    }
    fn score_field(&self) -> f64 {
        self.score.unwrap_or_default()
    }
}

impl SortFields for Registration {
    fn name_field(&self) -> String {
        self.student
            .as_ref()
            .map(Student::full_name)
            .unwrap_or_default()
    }
    fn code_field(&self) -> String {
        self.module
            .as_ref()
            .map(|module| module.code.clone())
            .unwrap_or_default()
    }
    fn id_field(&self) -> i64 {
        self.id.unwrap_or_default()
    }
}

fn compare<T: SortFields>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::NameAsc => cmp_text(&a.name_field(), &b.name_field()),
        SortKey::NameDesc => cmp_text(&b.name_field(), &a.name_field()),
        SortKey::CodeAsc => cmp_text(&a.code_field(), &b.code_field()),
        SortKey::CodeDesc => cmp_text(&b.code_field(), &a.code_field()),
        SortKey::IdAsc => a.id_field().cmp(&b.id_field()),
        SortKey::ScoreAsc => a.score_field().total_cmp(&b.score_field()),
        SortKey::ScoreDesc => b.score_field().total_cmp(&a.score_field()),
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Sorted copy of `items`; the source slice is never mutated.
#[must_use]
pub fn sorted_by<T: SortFields + Clone>(items: &[T], key: SortKey) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}
