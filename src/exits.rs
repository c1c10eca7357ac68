//! Exit handling: signal handlers and terminal restore on the way out.

/// Restore canonical mode, echo and output processing via termios.
#[cfg(unix)]
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on any exit, including `process::exit`.
#[cfg(unix)]
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Reset colors and show the cursor, only when stdout is a TTY
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(
                libc::STDOUT_FILENO,
                RESTORE.as_ptr() as *const libc::c_void,
                RESTORE.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit so atexit cleanup runs.
#[cfg(unix)]
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT - restore the terminal, then re-raise for the default action.
#[cfg(unix)]
extern "C" fn crash_handler(sig: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install signal handlers and register atexit cleanup.
#[cfg(unix)]
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub fn install_handlers() {}

/// Reset terminal state left over from a previous run.
#[cfg(unix)]
pub fn reset_terminal() {
    if unsafe { libc::isatty(libc::STDIN_FILENO) } == 1 {
        reset_terminal_termios();
    }
}

#[cfg(not(unix))]
pub fn reset_terminal() {
    let _ = crossterm::terminal::disable_raw_mode();
}
