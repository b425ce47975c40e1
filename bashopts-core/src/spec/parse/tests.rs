use super::*;

#[test]
fn split_raw_spec() {
    let mut input = "bar|b=s@;xyz";
    let raw = raw_spec(&mut input).unwrap();
    assert_eq!(
        raw,
        RawSpec {
            names: "bar|b",
            kind: Some("s@"),
            default: Some("xyz"),
        }
    );
    assert!(input.is_empty());

    let mut input = "foo";
    let raw = raw_spec(&mut input).unwrap();
    assert_eq!(raw.names, "foo");
    assert_eq!(raw.kind, None);
    assert_eq!(raw.default, None);

    // The default may contain `=`, but not `;`.
    let mut input = "foo=s;a=b;c";
    let raw = raw_spec(&mut input).unwrap();
    assert_eq!(raw.kind, Some("s"));
    assert_eq!(raw.default, Some("a=b"));
    assert!(input.is_empty());
}

#[test]
fn parse_names() {
    let mut input = "foo|f|F";
    assert_eq!(names(&mut input).unwrap(), ["foo", "f", "F"]);
    assert!(input.is_empty());

    let mut input = "dry-run_2";
    assert_eq!(names(&mut input).unwrap(), ["dry-run_2"]);

    let mut input = "_private|_";
    assert_eq!(names(&mut input).unwrap(), ["_private", "_"]);

    assert!(parse_complete("", names).is_none());
    assert!(parse_complete("foo|", names).is_none());
    assert!(parse_complete("|f", names).is_none());
    assert!(parse_complete("-foo", names).is_none());
    assert!(parse_complete("foo bar", names).is_none());
}

#[test]
fn parse_kind() {
    assert_eq!(parse_complete("s", kind), Some((Kind::String, false)));
    assert_eq!(parse_complete("s@", kind), Some((Kind::String, true)));
    assert_eq!(parse_complete("i", kind), Some((Kind::Int, false)));
    assert_eq!(parse_complete("i@", kind), Some((Kind::Int, true)));
    assert_eq!(parse_complete("", kind), None);
    assert_eq!(parse_complete("b", kind), None);
    assert_eq!(parse_complete("@", kind), None);
    assert_eq!(parse_complete("s@@", kind), None);
    assert_eq!(parse_complete("string", kind), None);
}

#[test_log::test]
fn parse_bool() {
    let spec = parse_spec("retry|r").unwrap();
    assert_eq!(spec.name(), "retry");
    assert_eq!(spec.aliases().collect::<Vec<_>>(), ["r"]);
    assert_eq!(spec.kind(), Kind::Bool);
    assert!(!spec.is_array());
    assert_eq!(spec.default(), "");
}

#[test]
fn parse_value_kinds() {
    let spec = parse_spec("url|u=s@").unwrap();
    assert_eq!(spec.kind(), Kind::String);
    assert!(spec.is_array());

    let spec = parse_spec("timeout|t=i").unwrap();
    assert_eq!(spec.kind(), Kind::Int);
    assert!(!spec.is_array());
    assert_eq!(spec.options(), ["--timeout", "-t"]);

    let spec = parse_spec("_foo|_=s").unwrap();
    assert_eq!(spec.options(), ["--_foo", "-_"]);
    assert_eq!(spec.variable(), "option__foo");
}

#[test]
fn parse_defaults() {
    assert_eq!(parse_spec("foo;true").unwrap().default(), "1");
    assert_eq!(parse_spec("foo;1").unwrap().default(), "1");
    assert_eq!(parse_spec("foo;false").unwrap().default(), "");
    assert_eq!(parse_spec("foo;0").unwrap().default(), "");
    assert_eq!(parse_spec("foo;").unwrap().default(), "");

    assert_eq!(parse_spec("hoge=i;10").unwrap().default(), "10");
    assert_eq!(parse_spec("hoge=i;-3").unwrap().default(), "-3");
    assert_eq!(parse_spec("hoge=i@;7").unwrap().default(), "7");

    assert_eq!(parse_spec("bar=s;xyz").unwrap().default(), "xyz");
    assert_eq!(parse_spec("bar=s;hello world").unwrap().default(), "hello world");
    assert_eq!(parse_spec("bar=s;a;b").unwrap().default(), "a");
}

#[test]
fn unknown_kind() {
    for token in ["foo=x", "foo=", "foo=@", "foo=b;1", "foo=s=x", "foo=ss"] {
        assert_eq!(
            parse_spec(token),
            Err(Error::UnknownKind(token.to_owned())),
            "token {token}"
        );
    }
    assert_eq!(
        parse_spec("foo=x").unwrap_err().to_string(),
        "unknown kind in foo=x"
    );
}

#[test]
fn invalid_default() {
    for token in ["foo;yes", "foo;TRUE", "foo;2", "hoge=i;abc", "hoge=i;1.5", "hoge=i; 1"] {
        assert_eq!(
            parse_spec(token),
            Err(Error::InvalidDefault(token.to_owned())),
            "token {token}"
        );
    }
    assert_eq!(
        parse_spec("hoge=i;abc").unwrap_err().to_string(),
        "invalid default in hoge=i;abc"
    );
}

#[test]
fn invalid_name() {
    for token in [
        "", "=s", ";true", "foo||f", "foo|", "a b", "-f", "foo@", "a|b|a", "url|u|u=s",
    ] {
        assert_eq!(
            parse_spec(token),
            Err(Error::InvalidName(token.to_owned())),
            "token {token:?}"
        );
    }
    let err = parse_spec("a b").unwrap_err();
    assert_eq!(err.token(), "a b");
    assert_eq!(err.to_string(), "invalid name in a b");
}
