use std::fmt;
use std::panic::Location;
use std::process;

use crate::error::Error;

/// Report an invariant violation and terminate the process.
///
/// Prints one line of the form `Panic in <file>, line <line>: <message>` and
/// exits with status 1. There is no unwind to catch.
#[track_caller]
pub(crate) fn fail(msg: fmt::Arguments<'_>) -> ! {
    let loc = Location::caller();
    println!("Panic in {}, line {}: {}", loc.file(), loc.line(), msg);
    process::exit(1)
}

/// Unwrap a fallible operation, aborting on error.
///
/// Fatal methods delegate to their `try_*` form through this; `#[track_caller]`
/// keeps the reported location at the violating call site.
#[track_caller]
pub(crate) fn require<T>(res: Result<T, Error>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => fail(format_args!("{e}")),
    }
}
