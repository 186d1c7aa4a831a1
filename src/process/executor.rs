use std::ffi::CString;
use std::io::{self, Write};

use libc::{c_char, c_int, pid_t};

use super::ProcessError;

const DEV_NULL: &[u8] = b"/dev/null\0";
const OPEN_FAILED: &[u8] = b"Error opening /dev/null\0";
const EXEC_FAILED: &[u8] = b"Command execution failed\0";

/// `argv` for `execvp`: owned C strings plus the NULL-terminated pointer
/// array that borrows them.
struct ArgVector {
    _owned: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl ArgVector {
    fn new(args: &[String]) -> Result<Self, ProcessError> {
        let owned = args
            .iter()
            .map(|arg| {
                CString::new(arg.as_bytes())
                    .map_err(|_| ProcessError::InvalidArgument(arg.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut ptrs: Vec<*const c_char> = owned.iter().map(|s| s.as_ptr()).collect();
        ptrs.push(std::ptr::null());

        Ok(Self {
            _owned: owned,
            ptrs,
        })
    }

    fn program(&self) -> *const c_char {
        self.ptrs[0]
    }

    fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }
}

/// Runs external programs in a forked child and waits for them.
#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `args[0]` with `args` as its argument vector, searching `PATH`,
    /// and blocks until it terminates.
    ///
    /// Returns `Ok(true)` only when the child exited normally with status 0.
    /// A program that cannot be found is a plain `Ok(false)`; failing to fork
    /// is an error.
    pub fn spawn_process(&self, args: &[String]) -> Result<bool, ProcessError> {
        if args.is_empty() {
            return Ok(false);
        }

        // Everything the child needs is allocated up front; after fork it
        // only makes raw system calls.
        let argv = ArgVector::new(args)?;
        let _ = io::stdout().flush();

        let pid = unsafe { libc::fork() };
        if pid < 0 {
            return Err(ProcessError::Fork(io::Error::last_os_error()));
        }

        if pid == 0 {
            unsafe { exec_child(&argv) }
        }

        log::debug!("spawned {} as pid {}", args[0], pid);
        self.wait_for(pid)
    }

    fn wait_for(&self, pid: pid_t) -> Result<bool, ProcessError> {
        let mut status: c_int = 0;

        loop {
            let rc = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) };
            if rc == -1 {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(ProcessError::Wait(err));
            }

            if libc::WIFEXITED(status) || libc::WIFSIGNALED(status) {
                break;
            }
        }

        if libc::WIFEXITED(status) {
            log::debug!("pid {} exited with {}", pid, libc::WEXITSTATUS(status));
        } else {
            log::debug!("pid {} killed by signal {}", pid, libc::WTERMSIG(status));
        }

        Ok(libc::WIFEXITED(status) && libc::WEXITSTATUS(status) == 0)
    }
}

/// Child side of the fork. Never returns.
///
/// The null-device redirection only happens after `execvp` has already
/// failed, so it silences nothing the failed command printed. That ordering is
/// kept as is.
unsafe fn exec_child(argv: &ArgVector) -> ! {
    let dev_null = libc::open(DEV_NULL.as_ptr().cast(), libc::O_WRONLY);
    if dev_null == -1 {
        libc::perror(OPEN_FAILED.as_ptr().cast());
        libc::_exit(libc::EXIT_FAILURE);
    }

    libc::execvp(argv.program(), argv.as_ptr());

    libc::perror(EXEC_FAILED.as_ptr().cast());
    libc::dup2(dev_null, libc::STDOUT_FILENO);
    libc::dup2(dev_null, libc::STDERR_FILENO);
    libc::close(dev_null);
    libc::_exit(libc::EXIT_FAILURE)
}
