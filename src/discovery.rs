//! Sub-test discovery through explicit registration.
//!
//! A test case lists its methods once through [`TestCase::methods`], usually
//! with the [`methods!`](crate::methods) macro. Discovery keeps every listed
//! method whose name starts with [`TEST_PREFIX`] and turns it into a
//! [`SubTest`], in registration order. Helpers can be listed alongside tests,
//! they are simply not discovered.
//!
//! [`TestCase::methods`]: crate::case::TestCase::methods

use std::{borrow::Cow, collections::HashSet};

use crate::test::{SubTest, TestFnHandle, TestResult};

/// Methods whose name starts with this prefix are sub-tests.
pub const TEST_PREFIX: &str = "test";

pub struct Method<C> {
    pub name: Cow<'static, str>,
    pub function: TestFnHandle<C>,
}

impl<C> Method<C> {
    pub fn new(name: impl Into<Cow<'static, str>>, function: TestFnHandle<C>) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }

    pub fn is_test(&self) -> bool {
        self.name.starts_with(TEST_PREFIX)
    }
}

/// The ordered method table of a test case.
pub struct Methods<C>(Vec<Method<C>>);

impl<C> Default for Methods<C> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<C> Methods<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method given as a plain function.
    pub fn with_fn(mut self, name: impl Into<Cow<'static, str>>, f: fn(&mut C) -> TestResult) -> Self {
        self.0.push(Method::new(name, TestFnHandle::from_fn(f)));
        self
    }

    /// Register a method given as a closure.
    pub fn with<F, T>(mut self, name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&mut C) -> T + 'static,
        T: Into<TestResult>,
    {
        self.0.push(Method::new(name, TestFnHandle::from_closure(f)));
        self
    }

    pub fn push(&mut self, method: Method<C>) {
        self.0.push(method);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method<C>> {
        self.0.iter()
    }
}

impl<C> FromIterator<Method<C>> for Methods<C> {
    fn from_iter<I: IntoIterator<Item = Method<C>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<C> IntoIterator for Methods<C> {
    type Item = Method<C>;
    type IntoIter = std::vec::IntoIter<Method<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Turn the test methods of a method table into sub-tests.
///
/// Order follows registration. A name registered twice is only discovered once.
pub fn discover<C>(methods: Methods<C>) -> Vec<SubTest<C>> {
    let mut seen = HashSet::new();
    methods
        .into_iter()
        .filter(Method::is_test)
        .filter(|method| {
            let fresh = seen.insert(method.name.clone());
            if !fresh {
                tracing::warn!(method = %method.name, "test method registered twice");
            }
            fresh
        })
        .map(|method| SubTest::new(method.name, method.function))
        .collect()
}

/// Build the method table of a test case from its method names.
///
/// Used inside `impl TestCase for ...`, every listed method takes `&self` or
/// `&mut self` and returns `()` or a `Result<(), E>` with `E: Debug`.
///
/// ```ignore
/// fn methods() -> Methods<Self> {
///     unitcase::methods![test_area, test_perimeter]
/// }
/// ```
#[macro_export]
macro_rules! methods {
    [$($method:ident),* $(,)?] => {
        <$crate::discovery::Methods<Self> as ::std::iter::FromIterator<_>>::from_iter([$(
            $crate::discovery::Method::new(
                ::std::stringify!($method),
                $crate::test::TestFnHandle::from_fn(|case: &mut Self| Self::$method(case).into()),
            ),
        )*])
    };
}
