use clap::Parser;
use std::ffi::OsString;
use userdb::config::Config;

/// Flags that may be written Go-style with a single dash (`-fileName x`,
/// `-id=3`). They are rewritten to `--name` before clap sees them.
const LONG_FLAGS: &[&str] = &[
    "fileName",
    "operation",
    "item",
    "id",
    "verbose",
    "help",
    "version",
];

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "userdb", bin_name = "userdb", version = get_version())]
#[command(args_override_self = true)]
#[command(about = "Manage user records stored as a JSON array in a single file", long_about = None)]
pub struct Cli {
    /// Path to the storage file
    #[arg(long = "fileName", value_name = "PATH", allow_hyphen_values = true)]
    pub file_name: Option<String>,

    /// One of: list, add, findById, remove
    #[arg(long, value_name = "OP")]
    pub operation: Option<String>,

    /// User record as JSON, e.g. {"id":"1","email":"a@b.com","age":30}
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Record identifier
    #[arg(long, value_name = "ID", allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_normalized<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    pub fn into_config(self) -> Config {
        Config {
            file_name: self.file_name.unwrap_or_default(),
            operation: self.operation.unwrap_or_default(),
            item: self.item.unwrap_or_default(),
            id: self.id.unwrap_or_default(),
        }
    }
}

/// Rewrites single-dash long flags (`-fileName`, `-id=1`) to the double-dash
/// form. Anything else, including flag values, passes through unchanged.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| if i == 0 { arg } else { normalize_arg(arg) })
        .collect()
}

fn normalize_arg(arg: OsString) -> OsString {
    let Some(s) = arg.to_str() else {
        return arg;
    };
    let Some(rest) = s.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    if LONG_FLAGS.contains(&name) {
        OsString::from(format!("-{}", s))
    } else {
        arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn single_dash_flags_are_rewritten() {
        let normalized = normalize_args(args(&["userdb", "-fileName", "u.json", "-id=3"]));
        assert_eq!(normalized, args(&["userdb", "--fileName", "u.json", "--id=3"]));
    }

    #[test]
    fn values_and_short_flags_pass_through() {
        let normalized = normalize_args(args(&["userdb", "--id", "-fileName-x", "-v", "-5"]));
        assert_eq!(normalized, args(&["userdb", "--id", "-fileName-x", "-v", "-5"]));
    }

    #[test]
    fn parses_go_style_command_line() {
        let cli = Cli::parse_normalized(args(&[
            "userdb",
            "-operation",
            "add",
            "-fileName",
            "users.json",
            "-item",
            r#"{"id":"1","email":"a@b.com","age":30}"#,
        ]));
        let config = cli.into_config();
        assert_eq!(config.operation, "add");
        assert_eq!(config.file_name, "users.json");
        assert!(config.item.starts_with('{'));
        assert!(config.id.is_empty());
    }

    #[test]
    fn missing_flags_become_empty_strings() {
        let config = Cli::parse_normalized(args(&["userdb"])).into_config();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn repeated_flag_keeps_last_value() {
        let cli = Cli::parse_normalized(args(&[
            "userdb",
            "-operation",
            "list",
            "-operation",
            "findById",
        ]));
        assert_eq!(cli.operation.as_deref(), Some("findById"));
    }

    #[test]
    fn hyphen_leading_id_is_a_value() {
        let cli = Cli::parse_normalized(args(&["userdb", "-id", "-1"]));
        assert_eq!(cli.id.as_deref(), Some("-1"));
    }
}
