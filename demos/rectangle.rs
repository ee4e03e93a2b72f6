//! Runs two small test cases against a toy shape library.
//!
//! ```text
//! cargo run --example rectangle
//! RUST_LOG=debug cargo run --example rectangle
//! ```

use unitcase::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    fn scaled(&self, factor: f64) -> Self {
        assert!(factor > 0.0, "scale factor must be positive, got {factor}");
        Self::new(self.width * factor, self.height * factor)
    }
}

unitcase::register_unit!(Rectangle);

#[derive(Debug, Default)]
struct RectangleTest {
    state: CaseState<Self>,
    subject: Option<Rectangle>,
}

impl RectangleTest {
    fn subject(&self) -> Rectangle {
        self.subject.unwrap_or(Rectangle::new(1.0, 1.0))
    }

    fn test_area(&mut self) {
        let rectangle = self.subject();
        self.header("area of a 3x4 rectangle");
        self.assert_equals(12, rectangle.area());
    }

    fn test_perimeter(&mut self) {
        let rectangle = self.subject();
        self.assert_equals_msg(14, rectangle.perimeter(), "two widths and two heights");
    }

    fn test_diagonal(&mut self) {
        let rectangle = self.subject();
        self.assert_float_equals(5.0, rectangle.diagonal(), 1e-9);
    }

    fn test_scaling(&mut self) {
        let rectangle = self.subject();
        self.assert_equals(48, rectangle.scaled(2.0).area());
        // never returns
        let _ = rectangle.scaled(-1.0);
    }

    fn test_sides(&mut self) {
        let rectangle = self.subject();
        self.assert_equals(vec![3.0, 4.0], [rectangle.width, rectangle.height]);
        self.assert_not_equals(rectangle.width, rectangle.height);
    }
}

impl TestCase for RectangleTest {
    fn unit(&self) -> Unit {
        Unit::of::<Rectangle>()
    }

    fn methods() -> Methods<Self> {
        unitcase::methods![test_area, test_perimeter, test_diagonal, test_scaling, test_sides]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }

    fn before_each(&mut self) {
        self.subject = Some(Rectangle::new(3.0, 4.0));
    }

    fn after_each(&mut self) {
        self.subject = None;
    }
}

/// Tests a shape that never got written.
#[derive(Debug, Default)]
struct TriangleTest {
    state: CaseState<Self>,
}

impl TriangleTest {
    fn test_area(&mut self) {
        self.fail("triangles are not implemented");
    }
}

impl TestCase for TriangleTest {
    fn unit(&self) -> Unit {
        Unit::named("Triangle")
    }

    fn methods() -> Methods<Self> {
        unitcase::methods![test_area]
    }

    fn state(&self) -> &CaseState<Self> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CaseState<Self> {
        &mut self.state
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let mut manager = TestManager::new();

    let mut case = RectangleTest::default();
    manager.run_unit_test_with(&mut case, &["test_area", "test_sides"]);
    println!("RectangleTest (area and sides only): {}", case.status_label());

    let mut catalog = CaseCatalog::new()
        .with_case::<RectangleTest>()
        .with_case::<TriangleTest>();
    if let Ok(class) = catalog.select("TriangleTest") {
        println!("selected {}", class.name());
    }
    match catalog.run_current(&manager) {
        Ok(row) => println!("{}", row.summary_line()),
        Err(err) => eprintln!("{err}"),
    }

    if let Err(err) = catalog.run_all(&mut manager) {
        eprintln!("{err}");
    }
}
