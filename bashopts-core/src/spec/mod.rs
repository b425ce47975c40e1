//! Option descriptors.
//!
//! A [`Spec`] describes one command line option of the generated script: its spellings, the kind
//! of value it takes, whether repeated occurrences accumulate and its default value. Specs are
//! written in a compact textual form:
//!
//! ```text
//! name[|alias]...[=s|=i][@][;default]
//! ```
//!
//! ```
//! use bashopts_core::{Kind, Spec};
//!
//! let spec: Spec = "url|u=s@;https://example.com".parse().unwrap();
//! assert_eq!(spec.name(), "url");
//! assert_eq!(spec.kind(), Kind::String);
//! assert!(spec.is_array());
//! assert_eq!(spec.options(), ["--url", "-u"]);
//! assert_eq!(spec.variable(), "option_url");
//! ```

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

mod parse;

/// The kind of value an option takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A flag without a value.
    Bool,
    /// A string value.
    String,
    /// A base-10 integer value.
    Int,
}

impl Kind {
    /// Returns true if options of this kind take a value argument.
    pub fn takes_value(self) -> bool {
        !matches!(self, Kind::Bool)
    }

    /// The letter used for this kind in a spec token, if any.
    pub fn letter(self) -> Option<char> {
        match self {
            Kind::Bool => None,
            Kind::String => Some('s'),
            Kind::Int => Some('i'),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Int => "int",
        })
    }
}

/// A parsed option spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    name: String,
    aliases: Vec<String>,
    kind: Kind,
    array: bool,
    /// Normalized: `1` or empty for bools.
    default: String,
    global: bool,
}

impl Spec {
    /// Parses a spec token.
    ///
    /// The resulting spec is local; use [`Spec::with_global`] to change that.
    pub fn parse(token: &str) -> crate::Result<Self> {
        parse::parse_spec(token)
    }

    /// Returns the spec with its variable scope set to global (`true`) or local (`false`).
    pub fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    /// The primary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The aliases, in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(String::as_str)
    }

    /// The kind of value the option takes.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether repeated occurrences accumulate into an array.
    pub fn is_array(&self) -> bool {
        self.array
    }

    /// The normalized default value.
    ///
    /// For [`Kind::Bool`] this is either `"1"` or empty.
    pub fn default(&self) -> &str {
        &self.default
    }

    /// Whether the generated variable is a script global.
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// The name of the shell variable holding the option's value.
    ///
    /// `option_` followed by the name with `-` replaced by `_`, upper-cased for global specs.
    pub fn variable(&self) -> String {
        let variable = format!("option_{}", self.name.replace('-', "_"));
        if self.global {
            variable.to_ascii_uppercase()
        } else {
            variable
        }
    }

    /// The primary spelling on the command line, e.g. `--name` or `-n`.
    pub fn option(&self) -> String {
        to_option(&self.name)
    }

    /// All spellings on the command line, primary first and then aliases in declaration order.
    pub fn options(&self) -> Vec<String> {
        core::iter::once(self.name.as_str())
            .chain(self.aliases())
            .map(to_option)
            .collect()
    }
}

fn to_option(name: &str) -> String {
    if name.len() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

impl FromStr for Spec {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Spec::parse(s)
    }
}

/// Writes the normalized token. The scope is not part of the textual form.
impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for alias in &self.aliases {
            write!(f, "|{alias}")?;
        }
        if let Some(letter) = self.kind.letter() {
            write!(f, "={letter}")?;
            if self.array {
                f.write_str("@")?;
            }
        }
        match self.kind {
            Kind::Bool if self.default == "1" => f.write_str(";true"),
            _ if self.default.is_empty() => Ok(()),
            _ => write!(f, ";{}", self.default),
        }
    }
}

impl Serialize for Spec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Spec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Spec::parse(&token).map_err(serde::de::Error::custom)
    }
}
