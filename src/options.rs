//! `--name value` option parsing for the benchmark binary.

use std::collections::HashMap;

/// Collects `--name value` pairs into a map keyed by option name.
///
/// The first occurrence of a name wins; later duplicates are ignored.
/// Tokens that are not `--` flags are skipped. A trailing flag with no
/// value is dropped.
pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> HashMap<String, String> {
    let mut options = HashMap::new();

    while let Some(arg) = args.next() {
        if let Some(name) = arg.strip_prefix("--") {
            if let Some(value) = args.next() {
                options.entry(name.to_string()).or_insert(value);
            }
        }
    }

    options
}
