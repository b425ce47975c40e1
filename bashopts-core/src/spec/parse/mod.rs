//! Parser for spec tokens using winnow.
//!
//! Parsing happens in two steps. The token is first split into its structural parts (names, kind
//! and default) and each part is then parsed on its own, so that a failure can be reported as the
//! matching [`Error`] variant.

use winnow::{
    combinator::{alt, opt, preceded, separated},
    error::InputError,
    token::{one_of, rest, take_till, take_while},
    ModalResult, Parser,
};

use super::{Kind, Spec};
use crate::{Error, Result};

/// The parts of a spec token, not validated yet.
#[derive(Debug, PartialEq, Eq)]
struct RawSpec<'a> {
    names: &'a str,
    kind: Option<&'a str>,
    default: Option<&'a str>,
}

/// Split a token into names, kind and default.
///
/// The first `;` starts the default and a second one ends it. The first `=` before that starts
/// the kind.
fn raw_spec<'a>(input: &mut &'a str) -> ModalResult<RawSpec<'a>, InputError<&'a str>> {
    let names = take_till(0.., ['=', ';']).parse_next(input)?;
    let kind = opt(preceded('=', take_till(0.., ';'))).parse_next(input)?;
    let default = opt(preceded(';', take_till(0.., ';'))).parse_next(input)?;
    // Anything after a second `;` is dropped.
    let _: Option<&str> = opt(preceded(';', rest)).parse_next(input)?;

    Ok(RawSpec {
        names,
        kind,
        default,
    })
}

/// Parse a name: starts with an alphanumeric or `_`, continues with alphanumerics, `-` and `_`.
fn name<'a>(input: &mut &'a str) -> ModalResult<&'a str, InputError<&'a str>> {
    (
        one_of(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '-' || c == '_'
        }),
    )
        .take()
        .parse_next(input)
}

/// Parse the name and its aliases: `name|alias|...`.
fn names<'a>(input: &mut &'a str) -> ModalResult<Vec<&'a str>, InputError<&'a str>> {
    separated(1.., name, '|').parse_next(input)
}

/// Parse a kind: `s` or `i`, optionally followed by `@` for arrays.
fn kind<'a>(input: &mut &'a str) -> ModalResult<(Kind, bool), InputError<&'a str>> {
    let kind = alt(('s'.value(Kind::String), 'i'.value(Kind::Int))).parse_next(input)?;
    let array = opt('@').parse_next(input)?.is_some();

    Ok((kind, array))
}

/// Validate and normalize a default against its kind.
fn default_value(kind: Kind, default: &str) -> Option<String> {
    if default.is_empty() {
        return Some(String::new());
    }

    match kind {
        Kind::Bool => match default {
            "true" | "1" => Some("1".to_owned()),
            "false" | "0" => Some(String::new()),
            _ => None,
        },
        Kind::Int => default.parse::<i64>().ok().map(|_| default.to_owned()),
        Kind::String => Some(default.to_owned()),
    }
}

/// Parse a spec token.
pub(super) fn parse_spec(token: &str) -> Result<Spec> {
    let raw =
        parse_complete(token, raw_spec).ok_or_else(|| Error::InvalidName(token.to_owned()))?;

    let names =
        parse_complete(raw.names, names).ok_or_else(|| Error::InvalidName(token.to_owned()))?;
    // Each spelling may only appear once.
    if names
        .iter()
        .enumerate()
        .any(|(i, name)| names[..i].contains(name))
    {
        return Err(Error::InvalidName(token.to_owned()));
    }
    let (kind, array) = match raw.kind {
        Some(k) => parse_complete(k, kind).ok_or_else(|| Error::UnknownKind(token.to_owned()))?,
        None => (Kind::Bool, false),
    };
    let default = default_value(kind, raw.default.unwrap_or_default())
        .ok_or_else(|| Error::InvalidDefault(token.to_owned()))?;

    let (name, aliases) = names
        .split_first()
        .ok_or_else(|| Error::InvalidName(token.to_owned()))?;
    let spec = Spec {
        name: (*name).to_owned(),
        aliases: aliases.iter().map(|alias| (*alias).to_owned()).collect(),
        kind,
        array,
        default,
        global: false,
    };
    tracing::debug!(
        token = %token,
        name = %spec.name,
        kind = %spec.kind,
        array = spec.array,
        "parsed option spec"
    );

    Ok(spec)
}

/// Run `parser` on `input`, succeeding only if all of it was consumed.
fn parse_complete<'a, T>(
    input: &'a str,
    parser: impl Fn(&mut &'a str) -> ModalResult<T, InputError<&'a str>>,
) -> Option<T> {
    let mut input_mut = input;
    match parser(&mut input_mut) {
        Ok(result) if input_mut.is_empty() => Some(result),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
