//! The routine around the case branches: variable declarations, the parsing loop and the final
//! invocation.

use bashopts_core::{Kind, Lines, Spec};

use crate::Config;

/// The shell expression assigning the spec's default.
fn default_value(spec: &Spec) -> String {
    let default = spec.default();
    let value = if spec.kind() == Kind::String && !default.is_empty() {
        format!(r#""{}""#, quote(default))
    } else {
        default.to_owned()
    };

    if spec.is_array() {
        format!("({value})")
    } else {
        value
    }
}

/// Escape `text` for use inside double quotes, so that the shell takes it literally.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}

/// Generate everything up to and including the opening of the case dispatch.
pub(crate) fn header(config: &Config, specs: &[Spec]) -> Lines {
    let mut l = Lines::new();
    if config.global {
        for spec in specs {
            l.push(0, format!("{}={}", spec.variable(), default_value(spec)));
        }
        l.push(0, "parse_options() {");
    } else {
        l.push(0, "main() {");
        for spec in specs {
            l.push(1, format!("local {}={}", spec.variable(), default_value(spec)));
        }
        l.push(1, "local argv=()");
    }
    l.push(1, r#"local _argv=("$@")"#);
    l.push(1, "local _v");
    l.push(1, "while [[ ${#_argv[@]} -gt 0 ]]; do");
    l.push(2, r#"case "${_argv[0]}" in"#);
    l
}

/// Generate the catch-all branches, the end of the loop and the invocation.
pub(crate) fn footer(config: &Config) -> Lines {
    let mut l = Lines::new();
    if config.binding {
        // `-abc` is re-queued as `-a -b -c`.
        l.push(2, "-[a-zA-Z0-9][a-zA-Z0-9]*)");
        l.push(3, r#"_v="${_argv[0]:1}""#);
        l.push(
            3,
            r#"_argv=($(echo "$_v" | \grep -o . | \sed -e 's/^/-/') "${_argv[@]:1}")"#,
        );
        l.push(3, ";;");
    }
    l.push(2, "-*)");
    l.push(3, r#"echo "Unknown option ${_argv[0]}" >&2"#);
    l.push(3, "return 1");
    l.push(3, ";;");
    l.push(2, "*)");
    l.push(3, r#"argv=("${argv[@]}" "${_argv[0]}")"#);
    l.push(3, r#"_argv=("${_argv[@]:1}")"#);
    l.push(3, ";;");
    l.push(2, "esac");
    l.push(1, "done");
    if !config.global {
        l.push(1, crate::CODE_MARKER);
    }
    l.push(0, "}");
    if config.global {
        l.push(0, r#"parse_options "$@" || exit 1"#);
    } else {
        l.push(0, "");
        l.push(0, r#"main "$@""#);
    }
    l
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(token: &str) -> Spec {
        Spec::parse(token).unwrap()
    }

    #[test]
    fn defaults() {
        assert_eq!(default_value(&spec("foo")), "");
        assert_eq!(default_value(&spec("foo;true")), "1");
        assert_eq!(default_value(&spec("bar=s")), "");
        assert_eq!(default_value(&spec("bar=s;xyz")), r#""xyz""#);
        assert_eq!(default_value(&spec("hoge=i;10")), "10");
        assert_eq!(default_value(&spec("bar=s@")), "()");
        assert_eq!(default_value(&spec("bar=s@;xyz")), r#"("xyz")"#);
        assert_eq!(default_value(&spec("hoge=i@;-1")), "(-1)");
    }

    #[test]
    fn string_defaults_are_literal() {
        assert_eq!(
            default_value(&spec(r#"bar=s;say "hi""#)),
            r#""say \"hi\"""#
        );
        assert_eq!(default_value(&spec(r"bar=s;a\")), r#""a\\""#);
        assert_eq!(
            default_value(&spec("bar=s@;$HOME `pwd`")),
            r#"("\$HOME \`pwd\`")"#
        );
    }

    #[test]
    fn global_header() {
        let config = Config {
            global: true,
            binding: true,
        };
        let specs = [
            spec("url|u=s@").with_global(true),
            spec("name=s;joe").with_global(true),
        ];
        assert_eq!(
            header(&config, &specs).to_string(),
            r#"OPTION_URL=()
OPTION_NAME="joe"
parse_options() {
  local _argv=("$@")
  local _v
  while [[ ${#_argv[@]} -gt 0 ]]; do
    case "${_argv[0]}" in
"#
        );
    }

    #[test]
    fn local_header() {
        let specs = [spec("retry|r;true"), spec("timeout=i;5")];
        let texts: Vec<_> = header(&Config::default(), &specs)
            .lines()
            .iter()
            .take(5)
            .map(|line| (line.level(), line.text().to_owned()))
            .collect();
        assert_eq!(
            texts,
            [
                (0, "main() {".to_owned()),
                (1, "local option_retry=1".to_owned()),
                (1, "local option_timeout=5".to_owned()),
                (1, "local argv=()".to_owned()),
                (1, r#"local _argv=("$@")"#.to_owned()),
            ]
        );
    }

    #[test]
    fn footer_binding() {
        let with = footer(&Config::default()).to_string();
        assert!(with.contains("    -[a-zA-Z0-9][a-zA-Z0-9]*)\n"));
        // Bundles are expanded before the generic `-*` branch.
        assert!(with.find("-[a-zA-Z0-9]").unwrap() < with.find("    -*)").unwrap());

        let without = footer(&Config {
            global: false,
            binding: false,
        })
        .to_string();
        assert!(!without.contains("-[a-zA-Z0-9]"));
        assert!(without.contains(r#"echo "Unknown option ${_argv[0]}" >&2"#));
    }

    #[test]
    fn footer_invocation() {
        let local = footer(&Config::default()).to_string();
        assert!(local.ends_with("  done\n  # WRITE YOUR CODE\n}\n\nmain \"$@\"\n"));

        let global = footer(&Config {
            global: true,
            binding: true,
        })
        .to_string();
        assert!(!global.contains("# WRITE YOUR CODE"));
        assert!(global.ends_with("  done\n}\nparse_options \"$@\" || exit 1\n"));
    }
}
