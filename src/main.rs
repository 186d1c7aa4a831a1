use env_logger::Env;
use log::LevelFilter;
use mantle::core::config::Config;
use mantle::flags::Flags;
use mantle::shell::Shell;
use std::env;

fn init_logging(debug: bool) {
    let default_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn main() -> Result<(), mantle::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("mantle {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(flags.is_set("debug"));

    let config = Config::from_flags(&flags)?;
    log::debug!(
        "history file {}, env log {}",
        config.paths.history_path.display(),
        config.paths.env_log_path.display()
    );

    let mut shell = Shell::new(config)?;
    shell.run()
}
