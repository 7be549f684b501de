//! Positional placeholder substitution for URL templates.
//!
//! Each `{n}` token in a template is replaced by the n-th positional
//! argument; literal text is copied through unchanged.

use crate::errors::{CustomResult, EndpointError};

/// Substitute `{n}` placeholders in `template` with `args[n]`.
///
/// Fails when a referenced index has no argument or the template carries an
/// unterminated or non-numeric placeholder.
pub fn format_message(template: &str, args: &[&str]) -> CustomResult<String, EndpointError> {
    let extra: usize = args.iter().map(|arg| arg.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let token_and_rest = &rest[open + 1..];
        let close = token_and_rest
            .find('}')
            .ok_or_else(|| EndpointError::MalformedTemplate {
                token: rest[open..].to_string(),
            })?;
        let token = &token_and_rest[..close];
        let index: usize = token
            .parse()
            .map_err(|_| EndpointError::MalformedTemplate {
                token: token.to_string(),
            })?;
        let value = args
            .get(index)
            .ok_or(EndpointError::MissingUrlParameter { index })?;
        out.push_str(value);
        rest = &token_and_rest[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
