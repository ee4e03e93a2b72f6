use crate::{
    case::TestCase,
    equality::{Value, safe_equals},
};

/// Assertions available on every [`TestCase`].
///
/// Each assertion counts against the sub-test that is currently running. A
/// failed assertion is counted as a failure and logged, it never stops the
/// sub-test.
///
/// Operands are converted into [`Value`]s and compared with
/// [`safe_equals`](crate::equality::safe_equals).
pub trait Assertions: TestCase {
    fn assert_equals(&mut self, expected: impl Into<Value>, actual: impl Into<Value>) {
        self.assert_equals_msg(expected, actual, "");
    }

    fn assert_equals_msg(
        &mut self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        msg: &str,
    ) {
        let (expected, actual) = (expected.into(), actual.into());
        let passed = safe_equals(&expected, &actual);
        record(self, passed, || {
            format!("{}{}", compare_clause(&expected, &actual), msg_clause(msg))
        });
    }

    fn assert_not_equals(&mut self, expected: impl Into<Value>, actual: impl Into<Value>) {
        self.assert_not_equals_msg(expected, actual, "");
    }

    fn assert_not_equals_msg(
        &mut self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        msg: &str,
    ) {
        let (expected, actual) = (expected.into(), actual.into());
        let passed = !safe_equals(&expected, &actual);
        record(self, passed, || {
            format!(
                " -- actual <{actual}> should be NOT equal to expected <{expected}>{}",
                msg_clause(msg)
            )
        });
    }

    /// Like `assert_equals(true, condition)`, the failure line only names the
    /// sub-test.
    fn assert_true(&mut self, condition: bool) {
        record(self, condition, String::new);
    }

    /// Like `assert_equals_msg(true, condition, msg)`.
    fn assert_true_msg(&mut self, condition: bool, msg: &str) {
        self.assert_equals_msg(true, condition, msg);
    }

    fn assert_float_equals(&mut self, expected: f64, actual: f64, tolerance: f64) {
        self.assert_float_equals_msg(expected, actual, tolerance, "");
    }

    /// Fails when `|actual - expected| > |tolerance|`.
    ///
    /// A NaN on either side never exceeds the tolerance and passes.
    fn assert_float_equals_msg(&mut self, expected: f64, actual: f64, tolerance: f64, msg: &str) {
        let exceeded = (actual - expected).abs() > tolerance.abs();
        record(self, !exceeded, || {
            format!(
                "{}{}",
                compare_clause(&expected.into(), &actual.into()),
                msg_clause(msg)
            )
        });
    }

    /// Record an unconditional failure.
    fn fail(&mut self, msg: &str) {
        self.show(&format!("Failed -- {msg}"));
        self.assert_true(false);
    }
}

impl<C: TestCase> Assertions for C {}

fn compare_clause(expected: &Value, actual: &Value) -> String {
    format!(" -- actual <{actual}> should be equal to expected <{expected}>")
}

fn msg_clause(msg: &str) -> String {
    match msg {
        "" => String::new(),
        msg => format!(" -- {msg}"),
    }
}

/// Count one assertion on the running sub-test and log it if it failed.
fn record<C: TestCase>(case: &mut C, passed: bool, detail: impl FnOnce() -> String) {
    let label = match case.state().current_sub_test() {
        Some(sub_test) => {
            sub_test.increment_count();
            if !passed {
                sub_test.increment_failures();
            }
            sub_test.label().to_owned()
        }
        None => {
            tracing::warn!(passed, "assertion outside of a running sub-test is not counted");
            String::from("-")
        }
    };

    if !passed {
        case.show(&format!("FAILED ({label}){}", detail()));
    }
}
