//! Process setup, run once from `main` before any mode starts.
//!
//! Nothing here touches generation.

use crate::exits;

pub fn init() {
    exits::reset_terminal();
    exits::install_handlers();
    disable_core_dumps();
}

/// Keep passwords out of core dumps and ptrace attach.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}
