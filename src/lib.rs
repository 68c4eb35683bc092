#![no_std]

//! Minimal unit-test harness for bare-metal targets.
//!
//! Tests are plain functions registered with a [`TestRunner`] (directly or
//! through the [`bare_test`] attribute and linker-section collection) and run
//! sequentially. Assertion failures are reported over a caller-supplied
//! [`TestIo`] channel in a stable, line-oriented text format; a fatal
//! assertion aborts only the current test body, never the suite.

#[macro_use]
extern crate log;

#[cfg(test)]
extern crate std;

pub mod io;
pub mod registry;

pub mod context;
pub mod report;
pub mod value;

pub mod runner;

#[cfg(test)]
pub(crate) mod testutil;

// Declared last so the exported assertion macros do not shadow the core
// prelude macros inside the crate's own modules.
#[macro_use]
pub mod assert;

// Re-export the registration attribute from the baretest-macros crate.
pub use baretest_macros::bare_test;

// Re-export commonly used types.
pub use context::TestResult;
pub use io::TestIo;
pub use registry::{MAX_NAME_LEN, MAX_TEST_CASES, Registry, TestCase, TestDescriptor, TestFn};
pub use report::Arg;
pub use runner::TestRunner;
pub use value::{StrOperand, WideInt};
