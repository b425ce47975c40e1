//! Generate bash option-parsing code from compact option specs.
//!
//! ```
//! use bashopts_codegen::{generate, parse_specs, Config};
//!
//! let config = Config::default();
//! let specs = parse_specs(&config, &["retry|r", "timeout|t=i;30"]).unwrap();
//! let code = generate(&config, &specs);
//! assert!(code.starts_with("main() {\n"));
//! assert!(code.contains("  local option_timeout=30\n"));
//! ```

use std::{collections::HashSet, io::Write};

use bashopts_core::Spec;

mod codegen;
pub use codegen::CodeGenerator;
mod error;
pub use error::{Error, Result};

/// The line in local mode output where the caller's own code goes.
pub const CODE_MARKER: &str = "# WRITE YOUR CODE";

/// Generation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit script-global variables and invoke the parser right away, instead of wrapping
    /// everything in a `main` function with local variables.
    pub global: bool,
    /// Expand bundled short options, so that `-abc` means `-a -b -c`.
    pub binding: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: false,
            binding: true,
        }
    }
}

/// Parse spec tokens.
///
/// Fails on the first invalid token. No specs at all is an error too, and so is a token reusing
/// a spelling or a variable name of an earlier one.
pub fn parse_specs<S: AsRef<str>>(config: &Config, tokens: &[S]) -> Result<Vec<Spec>> {
    if tokens.is_empty() {
        return Err(Error::MissingSpecs);
    }

    let mut options = HashSet::new();
    let mut variables = HashSet::new();
    let mut specs = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        let spec = Spec::parse(token)?.with_global(config.global);
        // `dry-run` and `dry_run` share a variable.
        let mut clashes = !variables.insert(spec.variable());
        for option in spec.options() {
            clashes |= !options.insert(option);
        }
        if clashes {
            return Err(bashopts_core::Error::InvalidName(token.to_owned()).into());
        }
        specs.push(spec);
    }

    Ok(specs)
}

/// Generate the option-parsing code for `specs`.
pub fn generate(config: &Config, specs: &[Spec]) -> String {
    let mut generator = CodeGenerator::new(*config);
    generator.generate(specs);
    generator.output()
}

/// Parse `tokens` and write the generated code to `writer`.
///
/// Nothing is written unless every token is valid.
pub fn run<S, W>(config: &Config, tokens: &[S], writer: &mut W) -> Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    let specs = parse_specs(config, tokens)?;
    let code = generate(config, &specs);
    writer.write_all(code.as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Describe the parsed specs as a JSON array of normalized spec tokens.
pub fn describe(specs: &[Spec]) -> Result<String> {
    serde_json::to_string_pretty(specs).map_err(Error::from)
}
