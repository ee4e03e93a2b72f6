use crate::{
    case::{Assertions, CaseState, TestCase},
    discovery::Methods,
    unit::Unit,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

crate::register_unit!(Rectangle);

#[derive(Debug)]
pub struct Circle;

crate::register_unit!("RoundThing" => Circle);

macro_rules! test_case {
    ($case:ty, unit = $unit:expr, methods = [$($method:ident),* $(,)?]) => {
        impl $crate::case::TestCase for $case {
            fn unit(&self) -> $crate::unit::Unit {
                $unit
            }

            fn methods() -> $crate::discovery::Methods<Self> {
                $crate::methods![$($method),*]
            }

            fn state(&self) -> &$crate::case::CaseState<Self> {
                &self.state
            }

            fn state_mut(&mut self) -> &mut $crate::case::CaseState<Self> {
                &mut self.state
            }
        }
    };
}

/// One sub-test with one passing assertion.
#[derive(Debug, Default)]
pub struct PassingTest {
    state: CaseState<Self>,
}

impl PassingTest {
    fn test_always_passes(&mut self) {
        self.assert_equals(1, 1);
    }
}

test_case!(PassingTest, unit = Unit::of::<Rectangle>(), methods = [test_always_passes]);

/// One sub-test with one failing assertion.
#[derive(Debug, Default)]
pub struct FailingTest {
    state: CaseState<Self>,
}

impl FailingTest {
    fn test_one_is_two(&mut self) {
        self.assert_equals(1, 2);
    }
}

test_case!(FailingTest, unit = Unit::of::<Rectangle>(), methods = [test_one_is_two]);

/// Passing, failing, panicking and erroring sub-tests plus a helper.
#[derive(Debug, Default)]
pub struct MixedTest {
    state: CaseState<Self>,
}

impl MixedTest {
    fn test_passes(&mut self) {
        self.assert_equals(12, Rectangle::new(3.0, 4.0).area());
    }

    fn test_fails(&mut self) {
        self.assert_equals(13, Rectangle::new(3.0, 4.0).area());
    }

    fn test_panics(&mut self) {
        panic!("wheels fell off");
    }

    fn test_errors(&mut self) -> Result<(), &'static str> {
        Err("no area")
    }

    fn square(&mut self) {
        self.assert_true(false);
    }
}

test_case!(
    MixedTest,
    unit = Unit::of::<Rectangle>(),
    methods = [test_passes, test_fails, square, test_panics, test_errors]
);

/// Names its unit instead of pointing at the type.
#[derive(Debug, Default)]
pub struct NamedUnitTest {
    state: CaseState<Self>,
}

impl NamedUnitTest {
    fn test_area(&mut self) {
        self.assert_float_equals(2.0, Rectangle::new(1.0, 2.0).area(), 1e-9);
    }
}

test_case!(NamedUnitTest, unit = Unit::named("Rectangle"), methods = [test_area]);

/// Names a unit nobody registered.
#[derive(Debug, Default)]
pub struct MissingUnitTest {
    state: CaseState<Self>,
}

impl MissingUnitTest {
    fn test_sides(&mut self) {
        self.assert_equals(6, 6);
    }
}

test_case!(MissingUnitTest, unit = Unit::named("Hexagon"), methods = [test_sides]);

/// Panics when asked for its unit.
#[derive(Debug, Default)]
pub struct PanickingUnitTest {
    state: CaseState<Self>,
}

impl PanickingUnitTest {
    fn test_nothing(&mut self) {}
}

test_case!(
    PanickingUnitTest,
    unit = panic!("no unit today"),
    methods = [test_nothing]
);

#[derive(Debug, Default)]
pub struct SelectTest {
    state: CaseState<Self>,
}

impl SelectTest {
    fn test_foo(&mut self) {
        self.assert_true(true);
    }

    fn test_bar(&mut self) {
        self.assert_true(true);
    }
}

test_case!(SelectTest, unit = Unit::of::<Circle>(), methods = [test_foo, test_bar]);

/// Records every hook and sub-test call.
#[derive(Debug, Default)]
pub struct HookTest {
    state: CaseState<Self>,
    pub calls: Vec<&'static str>,
}

impl HookTest {
    fn test_first(&mut self) {
        self.calls.push("test_first");
    }

    fn test_second(&mut self) {
        self.calls.push("test_second");
        panic!("second always breaks");
    }
}

impl TestCase for HookTest {
    fn unit(&self) -> Unit {
        Unit::of::<Rectangle>()
    }

    fn methods() -> Methods<Self> {
        crate::methods![test_first, test_second]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }

    fn before_all(&mut self) {
        self.calls.push("before_all");
    }

    fn after_all(&mut self) {
        self.calls.push("after_all");
    }

    fn before_each(&mut self) {
        self.calls.push("before_each");
    }

    fn after_each(&mut self) {
        self.calls.push("after_each");
    }
}

/// Breaks in `before_each` or `after_each` of the first sub-test only.
#[derive(Debug, Default)]
pub struct EachHookPanicTest {
    state: CaseState<Self>,
    pub calls: Vec<&'static str>,
    pub panic_before_each: bool,
    each_runs: usize,
}

impl EachHookPanicTest {
    pub fn panicking_before_each() -> Self {
        Self {
            panic_before_each: true,
            ..Self::default()
        }
    }

    pub fn panicking_after_each() -> Self {
        Self::default()
    }

    fn test_first(&mut self) {
        self.calls.push("test_first");
        self.assert_true(true);
    }

    fn test_second(&mut self) {
        self.calls.push("test_second");
        self.assert_true(true);
    }
}

impl TestCase for EachHookPanicTest {
    fn unit(&self) -> Unit {
        Unit::of::<Rectangle>()
    }

    fn methods() -> Methods<Self> {
        crate::methods![test_first, test_second]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }

    fn before_each(&mut self) {
        self.each_runs += 1;
        self.calls.push("before_each");
        if self.panic_before_each && self.each_runs == 1 {
            panic!("setup broke");
        }
    }

    fn after_each(&mut self) {
        self.calls.push("after_each");
        if !self.panic_before_each && self.each_runs == 1 {
            panic!("teardown broke");
        }
    }
}
