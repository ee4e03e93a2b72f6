//! A small unit testing framework built around test cases.
//!
//! A [`TestCase`] groups the test methods for one unit under test. Methods
//! whose name starts with `test` become [`SubTest`](test::SubTest)s, which a [`TestRunner`]
//! executes in order while the case counts assertions, failures and
//! exceptions and keeps a log of everything that happened. The
//! [`TestManager`] ties it together and prints summaries over several cases.

pub mod capture;
pub mod console;
pub mod discovery;
pub mod equality;
pub mod outcome;
pub mod unit;

mod case;
pub use case::*;

mod error;
pub use error::*;

mod manager;
pub use manager::*;

mod report;
pub use report::*;

mod runner;
pub use runner::*;

mod util;

#[cfg(test)]
mod test_support;

pub mod prelude {
    pub use crate::{
        case::{Assertions, CaseState, TestCase},
        discovery::Methods,
        manager::{CaseCatalog, CaseClass, TestManager},
        unit::Unit,
    };
}

#[doc(hidden)]
pub mod __private {
    pub use linkme;
}
