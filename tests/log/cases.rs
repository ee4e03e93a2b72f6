use unitcase::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    pub fn area(&self) -> f64 {
        self.side * self.side
    }

    pub fn perimeter(&self) -> f64 {
        // wrong on purpose
        3.0 * self.side
    }

    pub fn checked(side: f64) -> Square {
        assert!(side > 0.0, "side must be positive");
        Square::new(side)
    }
}

unitcase::register_unit!(Square);

#[derive(Debug, Default)]
pub struct ShapeTest {
    pub state: CaseState<Self>,
}

impl ShapeTest {
    fn test_area(&mut self) {
        self.assert_equals(16, Square::new(4.0).area());
        self.assert_float_equals(2.25, Square::new(1.5).area(), 1e-9);
    }

    fn test_perimeter(&mut self) {
        self.assert_equals_msg(16, Square::new(4.0).perimeter(), "four sides");
    }

    fn test_explodes(&mut self) {
        let square = Square::checked(-1.0);
        self.assert_equals(1, square.area());
    }
}

impl TestCase for ShapeTest {
    fn unit(&self) -> Unit {
        Unit::of::<Square>()
    }

    fn methods() -> Methods<Self> {
        unitcase::methods![test_area, test_perimeter, test_explodes]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }
}

#[derive(Debug, Default)]
pub struct AlwaysPassesTest {
    state: CaseState<Self>,
}

impl AlwaysPassesTest {
    fn test_always_passes(&mut self) {
        self.assert_equals(1, 1);
    }
}

impl TestCase for AlwaysPassesTest {
    fn unit(&self) -> Unit {
        Unit::named("Square")
    }

    fn methods() -> Methods<Self> {
        unitcase::methods![test_always_passes]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }
}

#[derive(Debug, Default)]
pub struct ThrowsTest {
    state: CaseState<Self>,
}

impl ThrowsTest {
    fn test_throws(&mut self) -> Result<(), String> {
        Err(String::from("plain error"))
    }

    fn test_after_throw(&mut self) {
        self.assert_true(true);
    }
}

impl TestCase for ThrowsTest {
    fn unit(&self) -> Unit {
        Unit::of::<Square>()
    }

    fn methods() -> Methods<Self> {
        unitcase::methods![test_throws, test_after_throw]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }
}

#[derive(Debug, Default)]
pub struct PentagonTest {
    state: CaseState<Self>,
}

impl PentagonTest {
    fn test_sides(&mut self) {
        self.assert_equals(5, 5);
    }
}

impl TestCase for PentagonTest {
    fn unit(&self) -> Unit {
        Unit::named("Pentagon")
    }

    fn methods() -> Methods<Self> {
        unitcase::methods![test_sides]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }
}

#[derive(Debug, Default)]
pub struct FooBarTest {
    state: CaseState<Self>,
}

impl FooBarTest {
    fn test_foo(&mut self) {
        self.assert_not_equals("foo", "bar");
    }

    fn test_bar(&mut self) {
        self.fail("bar is never selected");
    }
}

impl TestCase for FooBarTest {
    fn unit(&self) -> Unit {
        Unit::of::<Square>()
    }

    fn methods() -> Methods<Self> {
        unitcase::methods![test_foo, test_bar]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }
}
