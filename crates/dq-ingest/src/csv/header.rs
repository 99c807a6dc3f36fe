//! Header rows of a CSV file.

/// Column names of a CSV file, plus per-column labels when the names are
/// preceded by a label row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Trimmed column names, in file order.
    pub columns: Vec<String>,
    pub labels: Option<Vec<String>>,
}

impl CsvHeaders {
    /// Build headers from the leading lines of a file.
    ///
    /// One line holds the column names. With two lines the first holds
    /// labels and the second the column names.
    pub fn from_lines(lines: &[String]) -> Option<Self> {
        match lines {
            [names] => Some(Self {
                columns: split_header_line(names),
                labels: None,
            }),
            [labels, names, ..] => Some(Self {
                columns: split_header_line(names),
                labels: Some(split_header_line(labels)),
            }),
            [] => None,
        }
    }

    /// Rows occupied by headers before the first data row.
    pub fn header_rows(&self) -> usize {
        if self.labels.is_some() { 2 } else { 1 }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when no column has a name.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    pub fn label_for(&self, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.labels.as_ref()?.get(index).map(String::as_str)
    }
}

/// Split one header line on commas, honoring double quotes and `""` escapes.
/// Fields are trimmed.
pub fn split_header_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, quoted) {
            ('"', true) if chars.next_if_eq(&'"').is_some() => field.push('"'),
            ('"', _) => quoted = !quoted,
            (',', false) => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| (*line).to_string()).collect()
    }

    #[test]
    fn test_single_header_line() {
        let headers = CsvHeaders::from_lines(&lines(&["id,age"])).unwrap();

        assert_eq!(headers.columns, vec!["id", "age"]);
        assert_eq!(headers.header_rows(), 1);
        assert_eq!(headers.label_for("age"), None);
    }

    #[test]
    fn test_label_row() {
        let headers =
            CsvHeaders::from_lines(&lines(&["Customer id,Age in years", "id,age"])).unwrap();

        assert_eq!(headers.header_rows(), 2);
        assert_eq!(headers.label_for("age"), Some("Age in years"));
        assert_eq!(headers.label_for("signup_date"), None);
    }

    #[test]
    fn test_short_label_row() {
        let headers = CsvHeaders::from_lines(&lines(&["Customer id", "id,age"])).unwrap();
        assert_eq!(headers.label_for("age"), None);
    }

    #[test]
    fn test_no_lines() {
        assert!(CsvHeaders::from_lines(&[]).is_none());
    }

    #[test]
    fn test_blank_header() {
        let headers = CsvHeaders::from_lines(&lines(&[" , "])).unwrap();
        assert!(headers.is_blank());
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(
            split_header_line("\"last, first\",age"),
            vec!["last, first", "age"]
        );
    }

    #[test]
    fn test_split_escaped_quote() {
        assert_eq!(
            split_header_line("\"the \"\"real\"\" id\",age"),
            vec!["the \"real\" id", "age"]
        );
    }

    #[test]
    fn test_split_trims_fields() {
        assert_eq!(split_header_line("  age  , id ,"), vec!["age", "id", ""]);
    }
}
