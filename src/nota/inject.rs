//! Placeholder substitution.
//!
//! Three tokens are recognized: `$name`, `$id` and `$option`. They are replaced in that
//! order with plain literal text replacement, then a leading `~` and any environment
//! references are expanded. Variables that are not set are left as written, and `$$`
//! is kept verbatim so math such as `$$E = mc^2$$` survives.

use directories::BaseDirs;
use std::env;

pub const NAME_TOKEN: &str = "$name";
pub const ID_TOKEN: &str = "$id";
pub const OPTION_TOKEN: &str = "$option";

const LITERAL_DOLLARS: &str = "$$";

/// Substitute the note tokens in `value`, then expand home and environment references.
pub fn inject(name: &str, identifier: &str, option: &str, value: &str) -> String {
    let value = value
        .replace(NAME_TOKEN, name)
        .replace(ID_TOKEN, identifier)
        .replace(OPTION_TOKEN, option);
    expand(&value)
}

/// Expand `~`, `$VAR` and `${VAR}` (and `%VAR%` on Windows). `$$` is left untouched.
pub fn expand(value: &str) -> String {
    // shellexpand folds `$$` into `$`, so expand around each occurrence. Only the
    // first segment starts the string, so only it may carry a leading `~`.
    let expanded = value
        .split(LITERAL_DOLLARS)
        .enumerate()
        .map(|(index, segment)| {
            let segment = if index == 0 {
                shellexpand::full_with_context_no_errors(segment, home_dir, lookup_env)
            } else {
                shellexpand::env_with_context_no_errors(segment, lookup_env)
            };
            segment.into_owned()
        })
        .collect::<Vec<_>>()
        .join(LITERAL_DOLLARS);

    if cfg!(windows) {
        expand_percent_vars(&expanded, lookup_env)
    } else {
        expanded
    }
}

fn lookup_env(var: &str) -> Option<String> {
    env::var(var).ok()
}

fn home_dir() -> Option<String> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_string_lossy().into_owned())
}

fn expand_percent_vars<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('%') {
            // `%%` is a literal percent sign
            Some(0) => {
                out.push('%');
                rest = &after[1..];
            }
            Some(end) => {
                let var = &after[..end];
                match lookup(var) {
                    Some(resolved) => out.push_str(&resolved),
                    None => {
                        out.push('%');
                        out.push_str(var);
                        out.push('%');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
