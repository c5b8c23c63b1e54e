//! Positional `{N}` substitution for failure messages.

use crate::Value;

/// Replace every `{N}` placeholder in `template` with the string form of
/// `args[N]`.
///
/// A placeholder is `{`, one or more ASCII digits, `}`. Every occurrence
/// of an index is replaced, not just the first. Indexes past the end of
/// `args` (or too large to represent) become `undefined`. Substituted
/// text is never re-scanned, and any other brace text is kept verbatim.
///
/// ```text
/// interpolate("{0} is not a valid index for array of size {1}", &[10.into(), 5.into()])
///     == "10 is not a valid index for array of size 5"
/// ```
pub fn interpolate(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut placeholders = 0usize;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits > 0 && after.as_bytes().get(digits) == Some(&b'}') {
            placeholders += 1;
            push_argument(&mut out, &after[..digits], args);
            rest = &after[digits + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }
    out.push_str(rest);

    tracing::trace!(placeholders, args = args.len(), "interpolated message");
    out
}

fn push_argument(out: &mut String, digits: &str, args: &[Value]) {
    match digits.parse::<usize>().ok().and_then(|index| args.get(index)) {
        Some(value) => out.push_str(&value.to_string()),
        None => out.push_str("undefined"),
    }
}
