use std::fmt::{self, Debug};

use crate::{
    case::TestCase,
    console::Console,
    error::CatalogError,
    manager::TestManager,
    report::ResultRow,
    runner::{RunOutcome, TestRunner},
    unit::UnitResolver,
    util::short_name_of,
};

/// A test case type that can be instantiated and run on demand.
#[derive(Clone, Copy)]
pub struct CaseClass {
    name: &'static str,
    run: fn(&dyn UnitResolver) -> (ResultRow, RunOutcome),
}

impl CaseClass {
    pub fn of<C: TestCase + Default>() -> Self {
        Self {
            name: short_name_of::<C>(),
            run: run_fresh::<C>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run every sub-test of a fresh instance.
    ///
    /// The row is labeled with the class name in both name columns.
    pub fn run(&self, resolver: &dyn UnitResolver) -> (ResultRow, RunOutcome) {
        (self.run)(resolver)
    }
}

impl Debug for CaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CaseClass").field(&self.name).finish()
    }
}

fn run_fresh<C: TestCase + Default>(resolver: &dyn UnitResolver) -> (ResultRow, RunOutcome) {
    let mut case = C::default();
    let outcome = TestRunner::new(&mut case).with_resolver(resolver).run_all();
    (case.result_row(short_name_of::<C>()), outcome)
}

/// The test case classes known to a program and the one currently selected.
///
/// Until a class is selected, the first added class is current.
#[derive(Debug, Default, Clone)]
pub struct CaseCatalog {
    classes: Vec<CaseClass>,
    current: Option<usize>,
}

impl CaseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case<C: TestCase + Default>(mut self) -> Self {
        self.add(CaseClass::of::<C>());
        self
    }

    pub fn add(&mut self, class: CaseClass) -> &mut Self {
        self.classes.push(class);
        self
    }

    pub fn classes(&self) -> &[CaseClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Make the class called `name` the current one.
    pub fn select(&mut self, name: &str) -> Result<&CaseClass, CatalogError> {
        let index = self
            .classes
            .iter()
            .position(|class| class.name == name)
            .ok_or_else(|| CatalogError::UnknownCase(name.to_owned()))?;
        self.current = Some(index);
        Ok(&self.classes[index])
    }

    pub fn current(&self) -> Result<&CaseClass, CatalogError> {
        self.classes
            .get(self.current.unwrap_or(0))
            .ok_or(CatalogError::Empty)
    }

    /// Run a fresh instance of the current class.
    pub fn run_current<Resolver, Out>(
        &self,
        manager: &TestManager<Resolver, Out>,
    ) -> Result<ResultRow, CatalogError>
    where
        Resolver: UnitResolver,
        Out: Console,
    {
        let class = self.current()?;
        let (row, _) = class.run(manager.resolver());
        Ok(row)
    }

    /// Run every class and print the combined summary on the manager console.
    pub fn run_all<Resolver, Out>(
        &self,
        manager: &mut TestManager<Resolver, Out>,
    ) -> Result<Vec<ResultRow>, CatalogError>
    where
        Resolver: UnitResolver,
        Out: Console,
    {
        if self.classes.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(manager.run_test_case_classes(&self.classes))
    }
}
