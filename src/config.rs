use crate::services::pinboard::{AuthToken, DEFAULT_API_BASE};
use clap::{ArgAction, Parser};
use derive_more::derive::{Display, Error};
use std::path::PathBuf;

pub const BUILT_IN_FORMAT: &str = "adoc";

// long flags that take a value, the argument after one of these is never a flag
const VALUE_FLAGS: [&str; 4] = ["auth", "fmt", "tmpl", "api-base"];

#[derive(Parser, Debug, Clone)]
#[command(name = "pinboard-adoc")]
#[command(about = "A Pinboard.in client that creates a single adoc index of your bookmarks")]
pub struct Cli {
    /// Auth token for pinboard.in (required)
    #[arg(
        long,
        env = "PINBOARD_AUTH_TOKEN",
        default_value = "",
        hide_env_values = true,
        allow_hyphen_values = true
    )]
    pub auth: String,

    /// Format for output. One of: [adoc,custom]
    #[arg(long, default_value = BUILT_IN_FORMAT, allow_hyphen_values = true)]
    pub fmt: String,

    /// Path to template file if fmt is custom
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub tmpl: String,

    /// Print out an example template and quit
    // bare `-example` means true, `-example=false` turns it off
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub example: bool,

    /// Base url of the Pinboard v1 API
    #[arg(
        long,
        env = "PINBOARD_API_URL",
        default_value = DEFAULT_API_BASE,
        allow_hyphen_values = true
    )]
    pub api_base: String,
}

// missing flag combinations, reported as usage rather than as a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("You must provide an auth string.")]
    MissingAuth,
    #[display("You must provide a template path.")]
    MissingTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    BuiltIn,
    File(PathBuf),
}

// everything a single export run needs, resolved once from the command line
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub api_base: String,
    pub auth: AuthToken,
    pub template: TemplateSource,
}

#[derive(Debug, Clone)]
pub enum Mode {
    PrintExample,
    Export(ExportConfig),
}

impl Cli {
    // --example wins over everything, even a missing token
    pub fn into_mode(self) -> Result<Mode, ConfigError> {
        if self.example {
            return Ok(Mode::PrintExample);
        }

        if self.auth.is_empty() {
            return Err(ConfigError::MissingAuth);
        }

        let template = if self.fmt == BUILT_IN_FORMAT {
            TemplateSource::BuiltIn
        } else if !self.tmpl.is_empty() {
            TemplateSource::File(PathBuf::from(self.tmpl))
        } else {
            return Err(ConfigError::MissingTemplate);
        };

        Ok(Mode::Export(ExportConfig {
            api_base: self.api_base,
            auth: AuthToken::new(self.auth),
            template,
        }))
    }
}

/// Rewrites single-dash long flags (`-auth x`, `-fmt=adoc`) into the `--auth x` form clap
/// expects. Single-letter flags and anything after `--` pass through, and so does the value
/// following a flag that takes one (`-tmpl -x.tmpl` keeps `-x.tmpl` as the path).
pub fn normalize_go_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen_terminator = false;
    let mut value_pending = false;

    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || seen_terminator {
                return arg;
            }
            if value_pending {
                value_pending = false;
                return arg;
            }
            if arg == "--" {
                seen_terminator = true;
                return arg;
            }

            let is_go_long_flag = arg.len() > 2
                && arg.starts_with('-')
                && !arg.starts_with("--")
                && arg[1..].starts_with(|c: char| c.is_ascii_alphabetic());

            let arg = if is_go_long_flag { format!("-{}", arg) } else { arg };

            if let Some(name) = arg.strip_prefix("--") {
                value_pending = !name.contains('=') && VALUE_FLAGS.contains(&name);
            }

            arg
        })
        .collect()
}
