//! Free-text filtering over entity lists.
//!
//! Case-insensitive substring match of a trimmed query against a
//! view-specific set of fields. A blank query matches everything; a
//! missing field contributes nothing to the haystack.

use campus_core::entities::{Grade, Module, Registration, Student};

/// Fields a free-text query is matched against.
pub trait Searchable {
    /// The strings this entity can be found by.
    fn search_haystack(&self) -> Vec<String>;
}

impl Searchable for Student {
    fn search_haystack(&self) -> Vec<String> {
        let mut haystack = vec![
            self.full_name(),
            self.user_name.clone(),
            self.email.clone(),
        ];
        if let Some(id) = self.id {
            haystack.push(id.to_string());
        }
        haystack
    }
}

impl Searchable for Module {
    fn search_haystack(&self) -> Vec<String> {
        let mut haystack = vec![self.code.clone(), self.name.clone()];
        if let Some(id) = self.id {
            haystack.push(id.to_string());
        }
        haystack
    }
}

impl Searchable for Grade {
    fn search_haystack(&self) -> Vec<String> {
        let mut haystack = Vec::new();
        if let Some(student) = &self.student {
            haystack.push(student.full_name());
            haystack.push(student.user_name.clone());
        }
        if let Some(module) = &self.module {
            haystack.push(module.code.clone());
        }
        if let Some(id) = self.id {
            haystack.push(id.to_string());
        }
        haystack
    }
}

impl Searchable for Registration {
    fn search_haystack(&self) -> Vec<String> {
        let mut haystack = Vec::new();
        if let Some(student) = &self.student {
            haystack.push(student.user_name.clone());
            haystack.push(student.full_name());
        }
        if let Some(module) = &self.module {
            haystack.push(module.code.clone());
        }
        if let Some(id) = self.id {
            haystack.push(id.to_string());
        }
        haystack
    }
}

/// Keep the entities whose haystack contains `query`, case-insensitively.
///
/// The query is trimmed first; an empty result means "match everything",
/// returning all records unchanged in order. Produces a new list — the
/// source is never mutated.
#[must_use]
pub fn filter_by_query<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.search_haystack()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn student(id: i64, first: &str, last: &str, user: &str) -> Student {
        Student {
            id: Some(id),
            first_name: first.into(),
            last_name: last.into(),
            user_name: user.into(),
            ..Student::default()
        }
    }

    #[test]
    fn matches_substring_case_insensitively() {
        let students = vec![
            student(1, "Anna", "Lee", "alee"),
            student(2, "Bob", "Mint", "bmint"),
        ];
        let hits = filter_by_query(&students, "ann");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Anna");

        let hits = filter_by_query(&students, "MINT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Bob");
    }

    #[test]
    fn blank_query_returns_all_in_order() {
        let students = vec![
            student(2, "Bea", "K", "bea"),
            student(1, "Abe", "L", "abe"),
        ];
        for query in ["", "   ", "\t"] {
            let hits = filter_by_query(&students, query);
            assert_eq!(hits.len(), 2);
            assert_eq!(hits[0].first_name, "Bea");
        }
    }

    #[test]
    fn full_name_matches_across_first_and_last() {
        let students = vec![student(1, "Ada", "Lovelace", "ada")];
        assert_eq!(filter_by_query(&students, "da lov").len(), 1);
    }

    #[test]
    fn id_matches_as_string() {
        let students = vec![student(42, "Ada", "L", "ada")];
        assert_eq!(filter_by_query(&students, "42").len(), 1);
        assert_eq!(filter_by_query(&students, "43").len(), 0);
    }

    #[test]
    fn module_matches_code_or_name() {
        let modules = vec![Module {
            id: Some(3),
            code: "COMP0010".into(),
            name: "Software Engineering".into(),
            ..Module::default()
        }];
        assert_eq!(filter_by_query(&modules, "comp00").len(), 1);
        assert_eq!(filter_by_query(&modules, "engineering").len(), 1);
        assert_eq!(filter_by_query(&modules, "biology").len(), 0);
    }

    #[test]
    fn grade_matches_student_name_and_module_code() {
        let grades = vec![Grade {
            id: Some(5),
            score: Some(88.0),
            student: Some(student(1, "Ada", "Lovelace", "ada")),
            module: Some(Module {
                id: Some(2),
                code: "M1".into(),
                ..Module::default()
            }),
        }];
        assert_eq!(filter_by_query(&grades, "lovelace").len(), 1);
        assert_eq!(filter_by_query(&grades, "m1").len(), 1);
        assert_eq!(filter_by_query(&grades, "m2").len(), 0);
    }

    #[test]
    fn entities_with_missing_fields_do_not_panic() {
        let grades = vec![Grade::default()];
        assert_eq!(filter_by_query(&grades, "anything").len(), 0);
        assert_eq!(filter_by_query(&grades, "").len(), 1);
    }
}
