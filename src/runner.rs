use crate::{
    capture,
    case::TestCase,
    error::PreCheckError,
    test::SubTest,
    unit::{LinkedUnits, UnitResolver},
    util::short_name_of,
};

/// Where a [`TestRunner`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    PreCheck,
    /// The pre-check failed, no sub-test ran.
    Aborted,
    Running,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// All selected sub-tests ran and the summary was printed.
    Finished,
    /// The pre-check failed with the given error.
    Aborted(PreCheckError),
}

impl RunOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, RunOutcome::Finished)
    }
}

/// Runs a selection of sub-tests against one test case.
///
/// A runner borrows the case for the duration of a run. It checks the unit
/// under test, drives the lifecycle hooks and keeps a panicking or failing
/// sub-test from stopping the others.
pub struct TestRunner<'c, 'r, C: TestCase> {
    case: &'c mut C,
    sub_tests: Vec<usize>,
    resolver: &'r dyn UnitResolver,
    phase: RunPhase,
}

impl<'c, C: TestCase> TestRunner<'c, 'static, C> {
    /// A runner for every sub-test of `case`, resolving named units through
    /// [`LinkedUnits`].
    pub fn new(case: &'c mut C) -> Self {
        let sub_tests = (0..case.sub_tests().len()).collect();
        Self {
            case,
            sub_tests,
            resolver: &LinkedUnits,
            phase: RunPhase::Idle,
        }
    }
}

impl<'c, 'r, C: TestCase> TestRunner<'c, 'r, C> {
    pub fn with_resolver<'n>(self, resolver: &'n dyn UnitResolver) -> TestRunner<'c, 'n, C> {
        TestRunner {
            case: self.case,
            sub_tests: self.sub_tests,
            resolver,
            phase: self.phase,
        }
    }

    /// Keep only the sub-tests whose label is listed, in discovery order.
    pub fn with_labels<S: AsRef<str>>(self, labels: &[S]) -> Self {
        let sub_tests = self.case.sub_tests();
        let selected = self
            .sub_tests
            .iter()
            .copied()
            .filter(|&index| {
                labels
                    .iter()
                    .any(|label| label.as_ref() == sub_tests[index].label())
            })
            .collect();
        Self {
            sub_tests: selected,
            ..self
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn case(&self) -> &C {
        self.case
    }

    /// The sub-tests this runner executes.
    pub fn sub_tests(&self) -> impl Iterator<Item = &SubTest<C>> {
        let sub_tests = self.case.sub_tests();
        self.sub_tests.iter().map(|&index| &sub_tests[index])
    }

    /// Check that the unit under test is available.
    ///
    /// On failure the error is logged on the case and counted as an exception
    /// of the case, and the runner is [`Aborted`](RunPhase::Aborted).
    pub fn pre_check(&mut self) -> Result<(), PreCheckError> {
        self.phase = RunPhase::PreCheck;
        let err = match self.case.pre_test(self.resolver) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };

        tracing::warn!(case = short_name_of::<C>(), %err, "pre-check failed");
        self.case
            .show("PRE-CHECK FAILED")
            .show(&format!("Error: {err}"))
            .show("Could not run tests")
            .increment_exception_count();
        self.phase = RunPhase::Aborted;
        Err(err)
    }

    /// Run the pre-check, every selected sub-test and print the summary.
    pub fn run_all(&mut self) -> RunOutcome {
        let span = tracing::debug_span!("run", case = short_name_of::<C>());
        let _entered = span.enter();

        // the pre-check already runs user code that may panic
        capture::install_capture_hook();
        if let Err(err) = self.pre_check() {
            return RunOutcome::Aborted(err);
        }

        self.phase = RunPhase::Running;
        self.case.before_all();
        for index in self.sub_tests.clone() {
            self.run_sub_test(index);
        }
        self.case.after_all();
        self.case.show("");

        let unit_name = self.case.unit_name();
        self.case.print_summary(&unit_name);
        self.phase = RunPhase::Finished;
        RunOutcome::Finished
    }

    fn run_sub_test(&mut self, index: usize) {
        let case = &mut *self.case;
        let result = capture::catch_exception(|| {
            case.before_each();
            SubTest::run(case, index)?;
            case.after_each();
            Ok(())
        });

        let Err(exception) = result else {
            return;
        };

        case.state_mut().set_current(None);
        let sub_test = &case.sub_tests()[index];
        sub_test.increment_exceptions();
        tracing::error!(
            sub_test = sub_test.label(),
            %exception,
            "sub-test raised an exception"
        );
        let header = format!("EXCEPTION OCCURRED in {sub_test}");

        case.show(&header);
        for line in exception.display_lines() {
            case.show(&line);
        }
        case.show("");
    }
}
