use crate::{
    case::TestCase,
    console::{Console, StdoutConsole},
    report::{ResultRow, SUMMARY_BANNER},
    runner::{RunOutcome, TestRunner},
    unit::{LinkedUnits, UnitResolver},
};

mod catalog;
pub use catalog::*;

/// Entry point for running test cases.
///
/// The manager owns the unit resolver used for pre-checks and the console the
/// combined summary of [`run_test_case_classes`](Self::run_test_case_classes)
/// is printed on. Each case still logs to its own console.
///
/// ```ignore
/// let mut case = RectangleTest::default();
/// TestManager::new().run_unit_test(&mut case);
/// assert!(case.is_passing());
/// ```
#[derive(Debug)]
pub struct TestManager<Resolver = LinkedUnits, Out = StdoutConsole> {
    resolver: Resolver,
    console: Out,
}

impl Default for TestManager {
    fn default() -> Self {
        Self {
            resolver: LinkedUnits,
            console: StdoutConsole,
        }
    }
}

impl TestManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Resolver, Out> TestManager<Resolver, Out> {
    pub fn with_resolver<WithResolver: UnitResolver>(
        self,
        resolver: WithResolver,
    ) -> TestManager<WithResolver, Out> {
        TestManager {
            resolver,
            console: self.console,
        }
    }

    pub fn with_console<WithOut: Console>(self, console: WithOut) -> TestManager<Resolver, WithOut> {
        TestManager {
            resolver: self.resolver,
            console,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn console(&self) -> &Out {
        &self.console
    }

    pub fn into_console(self) -> Out {
        self.console
    }
}

impl<Resolver: UnitResolver, Out: Console> TestManager<Resolver, Out> {
    /// Run every sub-test of `case` and hand the case back for inspection.
    pub fn run_unit_test<'c, C: TestCase>(&self, case: &'c mut C) -> &'c mut C {
        TestRunner::new(&mut *case)
            .with_resolver(&self.resolver)
            .run_all();
        case
    }

    /// Run only the sub-tests of `case` whose label is in `labels`.
    ///
    /// Sub-tests that are not listed do not run and count nothing. Unknown
    /// labels are ignored.
    pub fn run_unit_test_with<'c, C: TestCase, S: AsRef<str>>(
        &self,
        case: &'c mut C,
        labels: &[S],
    ) -> &'c mut C {
        TestRunner::new(&mut *case)
            .with_resolver(&self.resolver)
            .with_labels(labels)
            .run_all();
        case
    }

    /// Run a fresh instance of every class and print one summary line per class.
    pub fn run_test_case_classes(&mut self, classes: &[CaseClass]) -> Vec<ResultRow> {
        let rows: Vec<ResultRow> = classes
            .iter()
            .map(|class| {
                let (row, outcome) = class.run(&self.resolver);
                if let RunOutcome::Aborted(err) = outcome {
                    tracing::warn!(case = class.name(), %err, "test case did not run");
                }
                row
            })
            .collect();

        self.console.print_line(SUMMARY_BANNER);
        for row in &rows {
            tracing::info!(
                case = %row.unit_test_name,
                count = row.count,
                passed = row.passed,
                percent = row.percent,
                "test case finished"
            );
            self.console.print_line(&row.summary_line());
        }
        rows
    }
}
