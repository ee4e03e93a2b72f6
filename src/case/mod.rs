//! Test cases: a suite of sub-tests for one unit under test.
//!
//! A test case is a plain type implementing [`TestCase`]. It embeds a
//! [`CaseState`] that holds its sub-tests, the currently running sub-test and
//! the case log, and it lists its test methods in [`TestCase::methods`].
//!
//! ```ignore
//! use unitcase::prelude::*;
//!
//! #[derive(Default)]
//! struct RectangleTest {
//!     state: CaseState<Self>,
//! }
//!
//! impl RectangleTest {
//!     fn test_area(&mut self) {
//!         self.assert_equals(12, Rectangle::new(3, 4).area());
//!     }
//! }
//!
//! impl TestCase for RectangleTest {
//!     fn unit(&self) -> Unit {
//!         Unit::of::<Rectangle>()
//!     }
//!
//!     fn methods() -> Methods<Self> {
//!         unitcase::methods![test_area]
//!     }
//!
//!     fn state(&self) -> &CaseState<Self> {
//!         &self.state
//!     }
//!
//!     fn state_mut(&mut self) -> &mut CaseState<Self> {
//!         &mut self.state
//!     }
//! }
//! ```
//!
//! A test case is run by one runner at a time. The active sub-test is a single
//! slot on the case, which `&mut` access to the case keeps exclusive.

use std::{
    borrow::Cow,
    cell::OnceCell,
    fmt::{self, Debug},
};

use crate::{
    capture,
    console::{Console, StdoutConsole},
    discovery::{self, Methods},
    error::PreCheckError,
    report::{COLUMN_HEADERS, ResultRow},
    test::SubTest,
    unit::{Unit, UnitResolver, UnitType},
    util::short_name_of,
};

mod assert;
pub use assert::*;

pub const BANNER: &str = "==========================================================\n";

/// A suite of test methods for one unit under test.
///
/// Implementors provide the unit, the method table and access to their
/// [`CaseState`]. The lifecycle hooks have defaults and can be overridden.
/// The remaining provided methods make up the reporting side of a case and are
/// not meant to be overridden.
pub trait TestCase: Sized + 'static {
    /// The unit this case validates.
    fn unit(&self) -> Unit;

    /// All methods of this case, discovered into sub-tests on first access.
    fn methods() -> Methods<Self>;

    fn state(&self) -> &CaseState<Self>;

    fn state_mut(&mut self) -> &mut CaseState<Self>;

    fn unit_name(&self) -> Cow<'static, str> {
        self.unit().name()
    }

    fn unit_type(&self) -> Option<UnitType> {
        self.unit().unit_type()
    }

    /// Make sure the unit under test exists before any sub-test runs.
    ///
    /// A unit given as a type always passes. A unit given by name has to
    /// resolve through `resolver`. A panic while probing the unit becomes a
    /// [`PreCheckError::Probe`].
    fn pre_test(&self, resolver: &dyn UnitResolver) -> Result<(), PreCheckError> {
        let unit = capture::catch_exception(|| Ok(self.unit()))
            .map_err(|exception| PreCheckError::Probe(exception.message().to_owned()))?;
        match unit {
            Unit::Type(_) => Ok(()),
            Unit::Named(name) => match resolver.resolve(&name) {
                Some(_) => Ok(()),
                None => Err(PreCheckError::UnitNotFound {
                    name: name.into_owned(),
                }),
            },
        }
    }

    /// Called once before any sub-test runs.
    fn before_all(&mut self) {
        let header = format!("----------- TEST Log for {} -----------\n", self.unit_name());
        self.show(BANNER).show(&header);
    }

    /// Called once after all sub-tests ran.
    fn after_all(&mut self) {}

    /// Called before every sub-test.
    fn before_each(&mut self) {}

    /// Called after every sub-test that did not raise an exception.
    fn after_each(&mut self) {}

    /// The discovered sub-tests, built once and then kept for the life of the case.
    fn sub_tests(&self) -> &[SubTest<Self>] {
        self.state().sub_tests()
    }

    fn is_passing(&self) -> bool {
        !self.sub_tests().iter().any(SubTest::has_failure_or_exception)
    }

    fn status_label(&self) -> &'static str {
        match self.is_passing() {
            true => "PASSED",
            false => "ERRORS",
        }
    }

    /// Append `msg` to the log and print it on the case console.
    fn show(&mut self, msg: &str) -> &mut Self {
        self.state_mut().show(msg);
        self
    }

    fn header(&mut self, header: &str) -> &mut Self {
        self.show(&format!("\nStarting test: {header}"))
    }

    fn log(&self) -> &str {
        self.state().log()
    }

    /// Reset the log and forget the discovered sub-tests.
    fn clear(&mut self) {
        self.state_mut().clear();
    }

    /// Count an exception that is not tied to a sub-test.
    fn increment_exception_count(&mut self) -> &mut Self {
        self.state_mut().increment_exceptions();
        self
    }

    fn print_summary(&mut self, unit_label: &str) {
        self.print_sub_test_summary(unit_label);
    }

    fn print_sub_test_summary(&mut self, unit_label: &str) {
        let lines: Vec<String> = self.sub_tests().iter().map(ToString::to_string).collect();
        self.show(&format!(
            "----------- TEST Listing for {unit_label} -----------\n"
        ));
        for line in lines {
            self.show(&line);
        }
        self.show("");
    }

    /// Headers for rendering [`result_row`](Self::result_row)s as a table.
    fn column_headers(&self) -> [&'static str; 4] {
        COLUMN_HEADERS
    }

    /// Totals over all sub-tests.
    fn result_row(&self, unit_label: &str) -> ResultRow {
        let sub_tests = self.sub_tests();
        let count = sub_tests.iter().map(SubTest::total_count).sum();
        let passed = sub_tests.iter().map(SubTest::passed_count).sum();
        ResultRow::new(short_name_of::<Self>(), unit_label, count, passed)
    }
}

/// The bookkeeping every test case carries.
pub struct CaseState<C> {
    sub_tests: OnceCell<Vec<SubTest<C>>>,
    current: Option<usize>,
    exceptions: usize,
    log: String,
    console: Box<dyn Console>,
}

impl<C> Default for CaseState<C> {
    fn default() -> Self {
        Self {
            sub_tests: OnceCell::new(),
            current: None,
            exceptions: 0,
            log: String::new(),
            console: Box::new(StdoutConsole),
        }
    }
}

impl<C> CaseState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_console(self, console: impl Console + 'static) -> Self {
        Self {
            console: Box::new(console),
            ..self
        }
    }

    pub fn log(&self) -> &str {
        &self.log
    }

    pub fn show(&mut self, msg: &str) {
        self.console.print_line(msg);
        if !self.log.is_empty() {
            self.log.push('\n');
        }
        self.log.push_str(msg);
    }

    /// Sub-tests if they were discovered already.
    pub fn discovered(&self) -> Option<&[SubTest<C>]> {
        self.sub_tests.get().map(Vec::as_slice)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The sub-test that is running right now.
    pub fn current_sub_test(&self) -> Option<&SubTest<C>> {
        self.discovered()?.get(self.current?)
    }

    pub(crate) fn set_current(&mut self, index: Option<usize>) {
        self.current = index;
    }

    /// Exceptions counted on the case itself, outside of any sub-test.
    pub fn exceptions(&self) -> usize {
        self.exceptions
    }

    pub fn increment_exceptions(&mut self) {
        self.exceptions += 1;
    }

    pub fn clear(&mut self) {
        self.sub_tests = OnceCell::new();
        self.current = None;
        self.exceptions = 0;
        self.log.clear();
    }
}

impl<C: TestCase> CaseState<C> {
    pub fn sub_tests(&self) -> &[SubTest<C>] {
        self.sub_tests
            .get_or_init(|| discovery::discover(C::methods()))
            .as_slice()
    }
}

impl<C> Debug for CaseState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseState")
            .field("sub_tests", &self.sub_tests)
            .field("current", &self.current)
            .field("exceptions", &self.exceptions)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}
