use serde::{Deserialize, Serialize};

use super::DeclKind;
use crate::error::ParserError;

/// One top-level declaration with its inclusive, 1-based line span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    pub kind: DeclKind,
    pub start_line: u32,
    pub end_line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeclarationRecord {
    #[must_use]
    pub const fn new(kind: DeclKind, start_line: u32, end_line: u32, name: Option<String>) -> Self {
        Self {
            kind,
            start_line,
            end_line,
            name,
        }
    }

    /// Name or the empty string, as written in delimited output.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn contains_line(&self, line: u32) -> bool {
        self.start_line <= line && line <= self.end_line
    }
}

/// Parse one `kind,start,end[,name]` line as emitted in CSV output.
///
/// An empty trailing name field decodes to `None`.
impl std::str::FromStr for DeclarationRecord {
    type Err = ParserError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ParserError::InvalidRecord {
            line: line.to_string(),
            reason,
        };

        let mut fields = line.trim_end_matches(['\r', '\n']).splitn(4, ',');
        let (Some(kind), Some(start), Some(end)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid("expected at least three fields".to_string()));
        };

        let kind = kind.parse::<DeclKind>().map_err(invalid)?;
        let start_line = start
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid(format!("start line: {e}")))?;
        let end_line = end
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid(format!("end line: {e}")))?;
        if start_line > end_line {
            return Err(invalid(format!(
                "start line {start_line} is after end line {end_line}"
            )));
        }

        let name = fields
            .next()
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Self::new(kind, start_line, end_line, name))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_named_record() {
        let record: DeclarationRecord = "Method,9,11,Point.String".parse().expect("valid line");
        assert_eq!(
            record,
            DeclarationRecord::new(DeclKind::Method, 9, 11, Some("Point.String".to_string()))
        );
    }

    #[test]
    fn empty_name_field_is_none() {
        let record: DeclarationRecord = "Import,3,3,".parse().expect("valid line");
        assert_eq!(record.name, None);
        let record: DeclarationRecord = "Import,3,3".parse().expect("valid line");
        assert_eq!(record.name, None);
    }

    #[test]
    fn rejects_short_lines_and_bad_numbers() {
        assert!("Import,3".parse::<DeclarationRecord>().is_err());
        assert!("Import,x,3,".parse::<DeclarationRecord>().is_err());
        assert!("Bogus,1,1,".parse::<DeclarationRecord>().is_err());
    }

    #[test]
    fn rejects_inverted_span() {
        let err = "Type,7,5,Point"
            .parse::<DeclarationRecord>()
            .expect_err("inverted span");
        assert!(err.to_string().contains("after end line"), "{err}");
    }

    #[test]
    fn contains_line_is_inclusive() {
        let record = DeclarationRecord::new(DeclKind::Type, 5, 7, Some("Point".to_string()));
        assert!(!record.contains_line(4));
        assert!(record.contains_line(5));
        assert!(record.contains_line(7));
        assert!(!record.contains_line(8));
    }

    #[test]
    fn json_omits_missing_name() {
        let record = DeclarationRecord::new(DeclKind::Import, 3, 3, None);
        let value = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(
            value,
            serde_json::json!({"kind": "Import", "start_line": 3, "end_line": 3})
        );
    }
}
