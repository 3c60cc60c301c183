//! Diagnostic rendering for API shapes.
//!
//! Every record renders as `{Name: value, ...}` listing only the fields that
//! are present, using the wire-cased attribute names in declaration order.
//! This is a logging format, not a wire format.

use std::collections::HashMap;
use std::fmt;

/// Builder for the `{Name: value, ...}` rendering of a record.
///
/// Absent fields are skipped entirely. Errors from the underlying formatter
/// are latched and reported by [`finish`](Self::finish).
pub struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
    result: fmt::Result,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    /// Opens the rendering with `{`.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self { f, first: true, result }
    }

    fn separator(&mut self) -> fmt::Result {
        if self.first {
            self.first = false;
            Ok(())
        } else {
            self.f.write_str(", ")
        }
    }

    /// Appends `name: value` when the value is present.
    pub fn field<T>(mut self, name: &str, value: Option<&T>) -> Self
    where
        T: fmt::Display + ?Sized,
    {
        if let (Ok(()), Some(value)) = (self.result, value) {
            self.result = self
                .separator()
                .and_then(|()| write!(self.f, "{name}: {value}"));
        }
        self
    }

    /// Appends `name: [a, b, ...]` when the sequence is present.
    pub fn field_list<T>(mut self, name: &str, value: Option<&[T]>) -> Self
    where
        T: fmt::Display,
    {
        if let (Ok(()), Some(items)) = (self.result, value) {
            self.result = self.separator().and_then(|()| {
                write!(self.f, "{name}: [")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        self.f.write_str(", ")?;
                    }
                    write!(self.f, "{item}")?;
                }
                self.f.write_str("]")
            });
        }
        self
    }

    /// Appends `name: {k: v, ...}` when the map is present.
    ///
    /// Entries are ordered by key so the rendering is deterministic.
    pub fn field_map(mut self, name: &str, value: Option<&HashMap<String, String>>) -> Self {
        if let (Ok(()), Some(map)) = (self.result, value) {
            self.result = self.separator().and_then(|()| {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort();
                write!(self.f, "{name}: {{")?;
                for (index, (key, entry)) in entries.into_iter().enumerate() {
                    if index > 0 {
                        self.f.write_str(", ")?;
                    }
                    write!(self.f, "{key}: {entry}")?;
                }
                self.f.write_str("}")
            });
        }
        self
    }

    /// Closes the rendering with `}`.
    pub fn finish(self) -> fmt::Result {
        self.result.and_then(|()| self.f.write_str("}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        labels: Option<Vec<String>>,
        environment: Option<HashMap<String, String>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ShapeFormatter::new(f)
                .field("Name", self.name.as_deref())
                .field("Count", self.count.as_ref())
                .field_list("Labels", self.labels.as_deref())
                .field_map("Environment", self.environment.as_ref())
                .finish()
        }
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let sample = Sample {
            name: Some("job-1".to_string()),
            count: None,
            labels: None,
            environment: None,
        };
        assert_eq!(sample.to_string(), "{Name: job-1}");
    }

    #[test]
    fn test_all_fields_render_in_declaration_order() {
        let mut environment = HashMap::new();
        environment.insert("b".to_string(), "2".to_string());
        environment.insert("a".to_string(), "1".to_string());

        let sample = Sample {
            name: Some("job-1".to_string()),
            count: Some(3),
            labels: Some(vec!["x".to_string(), "y".to_string()]),
            environment: Some(environment),
        };
        assert_eq!(
            sample.to_string(),
            "{Name: job-1, Count: 3, Labels: [x, y], Environment: {a: 1, b: 2}}"
        );
    }

    #[test]
    fn test_fully_absent_record_renders_empty_braces() {
        let sample = Sample { name: None, count: None, labels: None, environment: None };
        assert_eq!(sample.to_string(), "{}");
    }
}
