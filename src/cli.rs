use crate::config::DISPLAY_NAME;
use crate::paths::APP_NAME;
use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;

const KNOWN_FLAGS: [&str; 4] = ["-h", "--help", "-v", "--version"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub help: bool,
    pub version: bool,
}

pub fn command() -> Command {
    Command::new(APP_NAME)
        .about(format!("{}: tray icon with Unicode emoticons. Pick one, paste it with CTRL+V.", DISPLAY_NAME))
        .version(env!("CARGO_PKG_VERSION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .ignore_errors(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Print this help and exit"),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print the version and exit"),
        )
}

/// Unrecognized arguments are ignored wherever they appear.
pub fn parse_args<I, T>(args: I) -> Flags
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Ok(matches) = command().try_get_matches_from(known_args(args)) else {
        return Flags::default();
    };
    let flag = |id: &str| matches.get_one::<bool>(id).copied().unwrap_or(false);
    Flags {
        help: flag("help"),
        version: flag("version"),
    }
}

/// Program name plus the flags `command()` declares, in order.
fn known_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from(APP_NAME));

    std::iter::once(program)
        .chain(args.filter(|arg| arg.to_str().is_some_and(|a| KNOWN_FLAGS.contains(&a))))
        .collect()
}

pub fn usage() -> String {
    command().render_help().to_string()
}

pub fn version() -> String {
    format!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"))
}
