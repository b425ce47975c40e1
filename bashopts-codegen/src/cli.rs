use clap::{builder::BoolishValueParser, ArgAction, Parser};
use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use bashopts_codegen::Config;

const SPECS_HELP: &str = "\
Specs:
  foo        boolean --foo option
  foo|f      boolean --foo option, and it has an alias -f
  foo;true   boolean --foo option, and its default is true
  foo|f|F    boolean --foo option, and it has aliases -f and -F
  bar=s      --bar option that takes a string
  bar|b=s    --bar option that takes a string, and it has an alias -b
  bar=s;xyz  --bar option that takes a string, and its default is \"xyz\"
  bar=s@     --bar option that takes a string, and it can be used multiple times
  hoge=i     --hoge option that takes an integer
  hoge|h=i   --hoge option that takes an integer, and it has an alias -h
  hoge=i;10  --hoge option that takes an integer, and its default is 10
  hoge=i@    --hoge option that takes an integer, and it can be used multiple times

Examples:
  $ bashopts 'foo'
  $ bashopts --global 'foo|f;true' 'bar|b=s' 'hoge|h=i@'";

/// Flags that are also accepted with a single dash, e.g. `-global`.
const SINGLE_DASH_FLAGS: &[&str] = &["global", "binding", "no-binding", "version", "help", "list"];

/// Generate bash option-parsing code from option specs.
#[derive(Parser, Debug)]
#[command(name = "bashopts", author, version, about, long_about = None, after_help = SPECS_HELP)]
pub struct Args {
    /// Option specs, e.g. `foo|f`, `bar=s;xyz` or `hoge|h=i@`.
    #[arg(value_name = "SPECS", num_args = 1..)]
    pub specs: Vec<String>,

    /// Use script-global variables and parse right away, instead of a `main` function.
    #[arg(long)]
    pub global: bool,

    /// Expand bundled short options, so that `-abc` means `-a -b -c`.
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    pub binding: bool,

    /// Do not expand bundled short options.
    #[arg(long)]
    pub no_binding: bool,

    /// Output file path (defaults to stdout if not specified).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the parsed specs as JSON instead of generating code.
    #[arg(long)]
    pub list: bool,
}

impl Args {
    /// The generation options selected on the command line.
    pub fn config(&self) -> Config {
        Config {
            global: self.global,
            binding: self.binding && !self.no_binding,
        }
    }
}

/// Rewrite single-dash long flags (`-global`, `-binding=false`) to their double-dash form.
///
/// Arguments after `--` are left alone.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if positional {
                return arg;
            }
            if arg == "--" {
                positional = true;
                return arg;
            }
            single_dash_flag(&arg).unwrap_or(arg)
        })
        .collect()
}

fn single_dash_flag(arg: &OsStr) -> Option<OsString> {
    let arg = arg.to_str()?;
    let flag = arg.strip_prefix('-')?;
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);

    SINGLE_DASH_FLAGS
        .contains(&name)
        .then(|| OsString::from(format!("-{arg}")))
}
