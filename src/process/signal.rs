use std::io::{self, Write};

pub const FAREWELL: &str = "Caught Ctrl+C (or exit command). Exiting the shell...";
pub const EXIT_STATUS: i32 = 1;

/// Makes SIGINT take the same path as the `exit` built-in.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| terminate())
}

/// Prints the farewell and ends the process. Shared by `exit`, Ctrl-C and
/// end of input.
pub fn terminate() -> ! {
    let mut stdout = io::stdout();
    let _ = writeln!(stdout, "{}", FAREWELL);
    let _ = stdout.flush();
    std::process::exit(EXIT_STATUS)
}
