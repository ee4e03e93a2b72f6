//! Panic capture for sub-test execution.
//!
//! Rust prints every panic through the panic hook before unwinding. While a
//! sub-test runs we want that information in the case log instead of on
//! stderr, so [`install_capture_hook`] installs a hook that records the panic
//! location (and a backtrace, when enabled through `RUST_BACKTRACE`) into a
//! thread local slot. Outside of [`catch_exception`] the hook forwards to the
//! previously installed hook.

use std::{
    backtrace::{Backtrace, BacktraceStatus},
    cell::RefCell,
    panic::{self, AssertUnwindSafe, PanicHookInfo},
    sync::Once,
};

use crate::outcome::Exception;

#[derive(Debug, Default)]
struct PanicDetails {
    location: Option<String>,
    backtrace: Vec<String>,
}

thread_local! {
    /// `Some` while armed, holding the details of the last captured panic.
    static CAPTURED_PANIC: RefCell<Option<Option<PanicDetails>>> = const { RefCell::new(None) };
}

/// Install the capturing panic hook.
///
/// The hook is installed once per process and chains to the hook that was active
/// before, so panics outside of [`catch_exception`] are reported as usual.
pub fn install_capture_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let captured = CAPTURED_PANIC.with_borrow_mut(|slot| match slot {
                Some(details) => {
                    *details = Some(PanicDetails::from_hook_info(info));
                    true
                }
                None => false,
            });
            if !captured {
                previous(info);
            }
        }));
    });
}

impl PanicDetails {
    fn from_hook_info(info: &PanicHookInfo<'_>) -> Self {
        let location = info.location().map(|location| location.to_string());
        let backtrace = Backtrace::capture();
        let backtrace = match backtrace.status() {
            BacktraceStatus::Captured => backtrace.to_string().lines().map(String::from).collect(),
            _ => Vec::new(),
        };
        Self {
            location,
            backtrace,
        }
    }
}

/// Run `f`, turning a panic into an [`Exception`].
///
/// Panic details are only recorded once [`install_capture_hook`] ran, without
/// it the exception carries just the panic message. Calls may nest, the slot
/// of the enclosing call is restored on return.
pub fn catch_exception<F, R>(f: F) -> Result<R, Exception>
where
    F: FnOnce() -> Result<R, Exception>,
{
    let enclosing = CAPTURED_PANIC.with_borrow_mut(|slot| slot.replace(None));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    let details = CAPTURED_PANIC
        .with_borrow_mut(|slot| std::mem::replace(slot, enclosing))
        .flatten()
        .unwrap_or_default();

    match result {
        Ok(result) => result,
        Err(payload) => Err(Exception::Panicked {
            message: Exception::payload_as_string(payload.as_ref()),
            location: details.location,
            backtrace: details.backtrace,
        }),
    }
}
