use serde_json::{Number, Value};

/// Cell texts treated as missing values.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_VALUES: &[&str] = &["True", "TRUE", "true"];
const FALSE_VALUES: &[&str] = &["False", "FALSE", "false"];

/// Inferred type of a whole column. Ordered from most to least specific;
/// `Empty` means no non-missing cell was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Empty,
    Integer,
    Float,
    Boolean,
    String,
}

pub fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

fn parse_integer(cell: &str) -> Option<Number> {
    let trimmed = cell.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(Number::from(v));
    }
    trimmed.parse::<u64>().ok().map(Number::from)
}

fn parse_float(cell: &str) -> Option<Number> {
    // f64::from_str accepts "inf" and "NaN"; JSON has no room for either.
    let v = cell.trim().parse::<f64>().ok()?;
    Number::from_f64(v)
}

fn parse_bool(cell: &str) -> Option<bool> {
    if TRUE_VALUES.contains(&cell) {
        Some(true)
    } else if FALSE_VALUES.contains(&cell) {
        Some(false)
    } else {
        None
    }
}

fn kind_of(cell: &str) -> ColumnKind {
    if is_missing(cell) {
        ColumnKind::Empty
    } else if parse_integer(cell).is_some() {
        ColumnKind::Integer
    } else if parse_float(cell).is_some() {
        ColumnKind::Float
    } else if parse_bool(cell).is_some() {
        ColumnKind::Boolean
    } else {
        ColumnKind::String
    }
}

impl ColumnKind {
    /// Widens `self` just enough to also hold a cell of kind `other`.
    fn merge(self, other: ColumnKind) -> ColumnKind {
        use ColumnKind::*;
        match (self, other) {
            (Empty, k) | (k, Empty) => k,
            (a, b) if a == b => a,
            (Integer, Float) | (Float, Integer) => Float,
            _ => String,
        }
    }

    /// Folds every cell of a column into one kind.
    pub fn infer<'a, I>(cells: I) -> ColumnKind
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut kind = ColumnKind::Empty;
        for cell in cells.into_iter().flatten() {
            kind = kind.merge(kind_of(cell));
            if kind == ColumnKind::String {
                break;
            }
        }
        kind
    }

    /// Converts one cell under this column kind. Missing cells become null.
    pub fn convert(self, cell: Option<&str>) -> Value {
        let Some(cell) = cell.filter(|c| !is_missing(c)) else {
            return Value::Null;
        };

        let typed = match self {
            ColumnKind::Integer => parse_integer(cell).map(Value::Number),
            ColumnKind::Float => parse_float(cell).map(Value::Number),
            ColumnKind::Boolean => parse_bool(cell).map(Value::Bool),
            ColumnKind::Empty | ColumnKind::String => None,
        };

        typed.unwrap_or_else(|| Value::String(cell.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn infer(cells: &[&str]) -> ColumnKind {
        ColumnKind::infer(cells.iter().map(|c| Some(*c)))
    }

    #[test]
    fn test_infer_column_kinds() {
        assert_eq!(infer(&["1800", "1200"]), ColumnKind::Integer);
        assert_eq!(infer(&["1800", "", "1200"]), ColumnKind::Integer);
        assert_eq!(infer(&["1.5", "2"]), ColumnKind::Float);
        assert_eq!(infer(&["True", "false"]), ColumnKind::Boolean);
        assert_eq!(infer(&["1800", "1200-1500"]), ColumnKind::String);
        assert_eq!(infer(&["", "NA", "null"]), ColumnKind::Empty);
        assert_eq!(infer(&["inf"]), ColumnKind::String);
        assert_eq!(infer(&["1", "yes"]), ColumnKind::String);
    }

    #[test]
    fn test_convert_cells() {
        assert_eq!(ColumnKind::Integer.convert(Some(" 42 ")), json!(42));
        assert_eq!(ColumnKind::Integer.convert(Some("")), Value::Null);
        assert_eq!(ColumnKind::Integer.convert(None), Value::Null);
        assert_eq!(
            ColumnKind::Integer.convert(Some("18446744073709551615")),
            json!(u64::MAX)
        );
        assert_eq!(ColumnKind::Float.convert(Some("2")), json!(2.0));
        assert_eq!(ColumnKind::Float.convert(Some("-0.25")), json!(-0.25));
        assert_eq!(ColumnKind::Boolean.convert(Some("TRUE")), json!(true));
        assert_eq!(ColumnKind::String.convert(Some("1200")), json!("1200"));
        assert_eq!(ColumnKind::String.convert(Some(" Café ")), json!(" Café "));
        assert_eq!(ColumnKind::String.convert(Some("N/A")), Value::Null);
    }

    #[test]
    fn test_float_column_renders_integral_values_as_floats() {
        let value = ColumnKind::Float.convert(Some("3"));
        assert_eq!(serde_json::to_string(&value).unwrap(), "3.0");
    }
}
