//! `{placeholder}` substitution for endpoint path templates.

use std::collections::BTreeMap;

use crate::Error;

/// Serialized parameters keyed by placeholder name.
pub type ParamMap = BTreeMap<&'static str, String>;

/// Substitutes every `{name}` in `template` with `params[name]`, verbatim.
///
/// Values are not percent-encoded: the rendered string is the exact URL the
/// upstream API documents. An unmatched `{` is copied through unchanged.
pub fn render(template: &'static str, params: &ParamMap) -> Result<String, Error> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return Ok(out);
        };
        let name = &after[..close];
        let value = params.get(name).ok_or(Error::MissingParameter(name))?;
        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
