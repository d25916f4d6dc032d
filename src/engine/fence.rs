//! Best-effort stripping of markdown code fences from model replies.
//!
//! Some models wrap their JSON in a ```` ```json ```` block no matter what
//! the prompt says. This is a plain text-normalization step, kept separate
//! from parsing so fence edge cases can be tested in isolation.

/// Strip an optional surrounding triple-backtick fence from `text`.
///
/// Handles both tagged (```` ```json ````) and untagged fences; anything
/// that does not start with a fence is returned trimmed and untouched.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(after) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the rest of the fence line: a language tag, or nothing.
    let body = match after.find('\n') {
        Some(idx) => &after[idx + 1..],
        None => after.strip_prefix("json").unwrap_or(after),
    };

    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}
