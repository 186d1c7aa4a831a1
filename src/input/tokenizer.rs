/// Splits a command line into its argument vector.
///
/// Runs of ASCII whitespace collapse into one delimiter and nothing else is
/// interpreted: no quotes, escapes or expansions.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_ascii_whitespace().map(str::to_owned).collect()
}
