//! Go `flag`-style argument compatibility.
//!
//! The generator historically took single-dash long flags (`-fw echo`,
//! `-lib=gorm`). clap reads `-fw` as the short cluster `-f -w`, so those
//! spellings are rewritten to their `--` form before parsing. Only the
//! names below are rewritten; short clusters such as `-vv` pass through.
//!
//! Boolean flags also take Go's `-flag=<bool>` form: a true value becomes the
//! bare flag and a false value drops the argument.

use std::ffi::OsString;

/// Long flag names accepted with a single dash.
pub const GO_STYLE_FLAGS: &[&str] = &[
    "dir", "fw", "id", "lib", "module", "gateway", "dry-run", "help", "version",
];

/// Boolean switches accepting `=<bool>`, as (spelling, long name).
const BOOL_FLAGS: &[(&str, &str)] = &[
    ("g", "gateway"),
    ("gateway", "gateway"),
    ("dry-run", "dry-run"),
];

/// Rewrite `-name` / `-name=value` to `--name` / `--name=value` for the
/// flags in [`GO_STYLE_FLAGS`]. Arguments after `--` are left alone.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut rest_is_positional = false;
    args.into_iter()
        .map(Into::into)
        .filter_map(|arg| {
            if rest_is_positional {
                return Some(arg);
            }
            let Some(text) = arg.to_str() else {
                return Some(arg);
            };
            if text == "--" {
                rest_is_positional = true;
                return Some(arg);
            }
            if let Some(switch) = bool_switch(text) {
                return switch.map(OsString::from);
            }
            match rewrite(text) {
                Some(long) => Some(OsString::from(long)),
                None => Some(arg),
            }
        })
        .collect()
}

/// `-g=true` → `Some(Some("--gateway"))`, `-g=false` → `Some(None)`.
/// `None` when `arg` is not a boolean switch with a parseable value.
fn bool_switch(arg: &str) -> Option<Option<String>> {
    let body = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let (name, value) = body.split_once('=')?;
    let (_, long) = BOOL_FLAGS.iter().find(|(spelling, _)| *spelling == name)?;
    parse_go_bool(value).map(|on| on.then(|| format!("--{long}")))
}

/// The spellings Go's `strconv.ParseBool` accepts.
fn parse_go_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn rewrite(arg: &str) -> Option<String> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    GO_STYLE_FLAGS
        .contains(&name)
        .then(|| format!("-{arg}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(args: &[&str]) -> Vec<String> {
        normalize(args.iter().copied())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn rewrites_go_style_flags() {
        assert_eq!(
            norm(&["ca_gen", "gen_db", "-id", "string", "-lib=gorm", "-g", "User"]),
            vec!["ca_gen", "gen_db", "--id", "string", "--lib=gorm", "-g", "User"]
        );
        assert_eq!(
            norm(&["ca_gen", "gen_api", "-fw", "echo", "-dir", "api", "Order"]),
            vec!["ca_gen", "gen_api", "--fw", "echo", "--dir", "api", "Order"]
        );
    }

    #[test]
    fn leaves_short_and_double_dash_flags() {
        assert_eq!(
            norm(&["ca_gen", "-vv", "gen_api", "-d", "api", "--fw", "echo", "X"]),
            vec!["ca_gen", "-vv", "gen_api", "-d", "api", "--fw", "echo", "X"]
        );
    }

    #[test]
    fn boolean_switches_take_go_bool_values() {
        assert_eq!(
            norm(&["ca_gen", "gen_db", "-g=true", "-dry-run=F", "User"]),
            vec!["ca_gen", "gen_db", "--gateway", "User"]
        );
        assert_eq!(
            norm(&["ca_gen", "gen_db", "-g=false", "--gateway=1", "User"]),
            vec!["ca_gen", "gen_db", "--gateway", "User"]
        );
    }

    #[test]
    fn unparseable_bool_is_left_for_clap() {
        assert_eq!(
            norm(&["ca_gen", "gen_db", "-g=maybe", "User"]),
            vec!["ca_gen", "gen_db", "-g=maybe", "User"]
        );
    }

    #[test]
    fn stops_after_separator() {
        assert_eq!(
            norm(&["ca_gen", "gen_api", "--", "-fw"]),
            vec!["ca_gen", "gen_api", "--", "-fw"]
        );
    }
}
