//! Shell-token validation for values interpolated into generated commands.

use crate::core::error::CommandError;
use std::borrow::Cow;

/// Returns `true` if `value` is a non-empty word the shell reads back unchanged,
/// i.e. quoting it is a no-op.
///
/// 如果 `value` 是一个非空且 shell 会原样读取的单词（即无需加引号），则返回 `true`。
pub fn is_shell_safe(value: &str) -> bool {
    !value.is_empty() && matches!(shlex::try_quote(value), Ok(Cow::Borrowed(_)))
}

/// Fails with [`CommandError::UnsafeInput`] unless `value` is a plain shell word.
///
/// # Arguments
/// * `field` - Name of the input, reported in the error
/// * `value` - The value to check
pub fn ensure_shell_safe(field: &'static str, value: &str) -> Result<(), CommandError> {
    if is_shell_safe(value) {
        Ok(())
    } else {
        Err(CommandError::UnsafeInput {
            field,
            value: value.to_string(),
        })
    }
}
