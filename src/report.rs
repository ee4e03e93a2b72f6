use std::fmt::{self, Display};

/// Column headers for tabular summaries of [`ResultRow`]s.
pub const COLUMN_HEADERS: [&str; 4] = ["Unit Test", "Testee Type", "Count", "Passed"];

pub const SUMMARY_BANNER: &str = "----------- SUMMARY -----------\n";

#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Text(String),
    Count(usize),
    Percent(f64),
}

impl Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Text(text) => f.write_str(text),
            RowValue::Count(count) => write!(f, "{count}"),
            RowValue::Percent(percent) => write!(f, "{percent}"),
        }
    }
}

/// One `(key, label, value)` triple of a [`ResultRow`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub key: &'static str,
    pub label: &'static str,
    pub value: RowValue,
}

/// Aggregated results of one test case over all of its sub-tests.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ResultRow {
    pub unit_test_name: String,
    pub unit_type: String,
    pub count: usize,
    pub passed: usize,
    pub percent: f64,
}

impl ResultRow {
    /// Build a row from totals, the percentage is `100 * passed / count` or `0`
    /// for an empty count.
    pub fn new(
        unit_test_name: impl Into<String>,
        unit_type: impl Into<String>,
        count: usize,
        passed: usize,
    ) -> Self {
        let percent = match count {
            0 => 0.0,
            count => 100.0 * passed as f64 / count as f64,
        };
        Self {
            unit_test_name: unit_test_name.into(),
            unit_type: unit_type.into(),
            count,
            passed,
            percent,
        }
    }

    /// The row as ordered labeled values, for generic rendering.
    pub fn fields(&self) -> [LabeledValue; 5] {
        [
            LabeledValue {
                key: "unitTestName",
                label: "Unit Test",
                value: RowValue::Text(self.unit_test_name.clone()),
            },
            LabeledValue {
                key: "unitType",
                label: "Unit Type",
                value: RowValue::Text(self.unit_type.clone()),
            },
            LabeledValue {
                key: "count",
                label: "Count",
                value: RowValue::Count(self.count),
            },
            LabeledValue {
                key: "passed",
                label: "Passed",
                value: RowValue::Count(self.passed),
            },
            LabeledValue {
                key: "Percent",
                label: "Percent",
                value: RowValue::Percent(self.percent),
            },
        ]
    }

    /// One line for the combined summary over several test cases.
    pub fn summary_line(&self) -> String {
        format!(
            "{} tests {} -- {}/{} -- {}%",
            self.unit_test_name, self.unit_type, self.count, self.passed, self.percent
        )
    }
}
