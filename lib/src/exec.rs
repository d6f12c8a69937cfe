use std::borrow::Cow;

fn needs_quotes(arg: &str) -> bool {
    arg.is_empty()
        || arg == ";"
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'))
}

fn quote(arg: &str) -> Cow<'_, str> {
    if !needs_quotes(arg) {
        return Cow::Borrowed(arg);
    }
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Join an argument vector into an `Exec*=` command line that systemd splits
/// back into the same arguments.
///
/// Arguments with whitespace, quotes or backslashes are double-quoted with
/// C-style escapes. `$` and `%` are left as-is, so variable and specifier
/// expansion still applies.
pub fn command_line<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| quote(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
