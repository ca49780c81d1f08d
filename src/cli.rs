//! Command-line interface for authlink.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Datastore host.
    pub db_host: Option<String>,
    /// Datastore login.
    pub db_login: Option<String>,
    /// Datastore password.
    pub db_password: Option<String>,
    /// Session cache host.
    pub cache_host: Option<String>,
    /// Session cache login.
    pub cache_login: Option<String>,
    /// Session cache password.
    pub cache_password: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Long("db-host") => {
                result.db_host = Some(non_empty("db-host", parser.value()?.parse()?)?);
            }
            Long("db-login") => {
                result.db_login = Some(parser.value()?.parse()?);
            }
            Long("db-password") => {
                result.db_password = Some(parser.value()?.parse()?);
            }
            Long("cache-host") => {
                result.cache_host = Some(non_empty("cache-host", parser.value()?.parse()?)?);
            }
            Long("cache-login") => {
                result.cache_login = Some(parser.value()?.parse()?);
            }
            Long("cache-password") => {
                result.cache_password = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

fn non_empty(name: &'static str, value: String) -> Result<String, ArgsError> {
    if value.trim().is_empty() {
        Err(ArgsError::InvalidValue(name, value))
    } else {
        Ok(value)
    }
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"authlink {version}
Credential store and session authority wired through capability traits

USAGE:
    authlink [OPTIONS]

OPTIONS:
    -c, --config <FILE>          Path to configuration file (JSON)
    -l, --log-level <LVL>        Log level (error, warn, info, debug, trace)
        --db-host <HOST>         Datastore host [default: localhost]
        --db-login <LOGIN>       Datastore login [default: sqluser]
        --db-password <PASS>     Datastore password
        --cache-host <HOST>      Session cache host [default: localhost]
        --cache-login <LOGIN>    Session cache login [default: redisuser]
        --cache-password <PASS>  Session cache password
    -h, --help                   Print help
    -V, --version                Print version

ENVIRONMENT VARIABLES:
    AUTHLINK_DB_HOST          Datastore host (overrides config)
    AUTHLINK_DB_LOGIN         Datastore login (overrides config)
    AUTHLINK_DB_PASSWORD      Datastore password (overrides config)
    AUTHLINK_CACHE_HOST       Session cache host (overrides config)
    AUTHLINK_CACHE_LOGIN      Session cache login (overrides config)
    AUTHLINK_CACHE_PASSWORD   Session cache password (overrides config)
    AUTHLINK_LOG_LEVEL        Log level (overrides config)
    RUST_LOG                  Alternative log level setting

EXAMPLES:
    # Wire with defaults
    authlink

    # Wire against a remote datastore
    authlink --db-host db.internal --db-login app

    # Start with config file
    authlink -c /etc/authlink/config.json
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("authlink {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
