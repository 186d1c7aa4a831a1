use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Flag {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }

    fn option(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Flag {
            takes_value: true,
            ..Flag::switch(short, long, description)
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert("help", Flag::switch("-h", "--help", "Print this help message"));
        flags.insert("version", Flag::switch("-v", "--version", "Show version information"));
        flags.insert("debug", Flag::switch("-d", "--debug", "Enable debug logging"));
        flags.insert(
            "history-file",
            Flag::option("-H", "--history-file", "Where to mirror command history"),
        );
        flags.insert(
            "env-file",
            Flag::option("-e", "--env-file", "Where to log environment changes"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == flag.short || arg == flag.long)
                .ok_or_else(|| ShellError::Flag(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                match args.get(i + 1) {
                    Some(value) => {
                        flag.value = Some(value.clone());
                        i += 1;
                    }
                    None => {
                        return Err(ShellError::Flag(format!("Flag {} requires a value", arg)));
                    }
                }
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .get(name)
            .filter(|f| f.takes_value)
            .and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: mantle [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <path>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<22} {}", flag.short, long, flag.description);
        }
    }
}
