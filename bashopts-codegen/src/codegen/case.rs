//! Case branches for individual options.
//!
//! The branches operate on `_argv`, the arguments not consumed yet, and store extracted values in
//! the scratch variable `_v`.

use bashopts_core::{Kind, Lines, Spec};

/// Generate the case branch handling `spec`.
pub(crate) fn case(spec: &Spec) -> Lines {
    if spec.kind().takes_value() {
        value_case(spec)
    } else {
        bool_case(spec)
    }
}

fn bool_case(spec: &Spec) -> Lines {
    let mut l = Lines::new();
    l.push(0, format!("{})", spec.options().join(" | ")));
    l.push(1, format!("{}=1", spec.variable()));
    l.push(1, r#"_argv=("${_argv[@]:1}")"#);
    l.push(1, ";;");
    l
}

fn value_case(spec: &Spec) -> Lines {
    let options = spec.options();
    let variable = spec.variable();
    let mut l = Lines::new();

    let patterns: Vec<String> = options
        .iter()
        .cloned()
        .chain(options.iter().map(|o| format!("{o}=*")))
        .collect();
    l.push(0, format!("{})", patterns.join(" | ")));

    // `--name=value` and `-n=value`; the first declared spelling is tried first.
    for (i, option) in options.iter().enumerate() {
        let condition = if i == 0 { "if" } else { "elif" };
        l.push(1, format!("{condition} [[ ${{_argv[0]}} =~ ^{option}= ]]; then"));
        l.push(2, format!(r#"_v="${{_argv[0]##{option}=}}""#));
        l.push(2, r#"_argv=("${_argv[@]:1}")"#);
    }

    // `--name value`
    l.push(1, "else");
    l.push(2, "if [[ -z ${_argv[1]} ]] || [[ ${_argv[1]} =~ ^- ]]; then");
    l.push(3, r#"echo "${_argv[0]} option requires an argument" >&2"#);
    l.push(3, "return 1");
    l.push(2, "fi");
    l.push(2, r#"_v="${_argv[1]}""#);
    l.push(2, r#"_argv=("${_argv[@]:2}")"#);
    l.push(1, "fi");

    if spec.kind() == Kind::Int {
        l.push(1, "if [[ ! $_v =~ ^-?[0-9]+$ ]]; then");
        l.push(
            2,
            format!(r#"echo "{} option takes only integer" >&2"#, spec.option()),
        );
        l.push(2, "return 1");
        l.push(1, "fi");
    }

    if spec.is_array() {
        l.push(1, format!(r#"{variable}=("${{{variable}[@]}}" "$_v")"#));
    } else {
        l.push(1, format!(r#"{variable}="$_v""#));
    }
    l.push(1, ";;");
    l
}
