//! Flag name and shorthand validation.
//!
//! Names become long options (`--name`) on the wrapped command, so they are
//! restricted to lowercase ASCII alphanumerics and single dashes. Shorthands
//! become `-c` options and must be one ASCII alphanumeric character.

use crate::error::{CliffError, CliffResult, NameRule};

/// Checks `name` against every naming rule, reporting the first one broken.
///
/// # Errors
///
/// Returns [`CliffError::InvalidName`] carrying the violated [`NameRule`].
///
/// # Examples
///
/// ```
/// use cliff::{NameRule, validate_name};
///
/// assert!(validate_name("dry-run").is_ok());
/// let err = validate_name("Dry-Run").unwrap_err();
/// assert!(matches!(err, cliff::CliffError::InvalidName { rule: NameRule::Lowercase, .. }));
/// ```
pub fn validate_name(name: &str) -> CliffResult<()> {
    name_rule_violation(name).map_or(Ok(()), |rule| {
        Err(CliffError::InvalidName {
            name: name.to_owned(),
            rule,
        })
    })
}

/// Checks that a shorthand is a single ASCII alphanumeric character.
///
/// # Errors
///
/// Returns [`CliffError::InvalidShort`] naming the owning flag.
pub fn validate_short(name: &str, short: char) -> CliffResult<()> {
    if short.is_ascii_alphanumeric() {
        Ok(())
    } else {
        Err(CliffError::InvalidShort {
            name: name.to_owned(),
            short,
        })
    }
}

fn name_rule_violation(name: &str) -> Option<NameRule> {
    let Some(first) = name.chars().next() else {
        return Some(NameRule::Empty);
    };
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        Some(NameRule::Lowercase)
    } else if !first.is_ascii_alphanumeric() {
        Some(NameRule::LeadingCharacter)
    } else if name.contains("--") {
        Some(NameRule::DoubleDash)
    } else if name.contains('=') {
        Some(NameRule::EqualsSign)
    } else if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Some(NameRule::Characters)
    } else {
        None
    }
}
