/// Number of leading characters revealed by [`token_preview`].
pub const PREVIEW_LEN: usize = 10;

/// Placeholder returned when a token is too short to truncate meaningfully.
pub const MASKED_PREVIEW: &str = "***";

/// Produces a truncated preview of a session token for display.
///
/// Reveals the first [`PREVIEW_LEN`] characters followed by `"..."`. Tokens
/// of [`PREVIEW_LEN`] characters or fewer (including the empty string)
/// collapse to [`MASKED_PREVIEW`] so the preview never echoes a whole token
/// back. The preview is a partial redaction for display, not a security
/// boundary.
#[must_use]
pub fn token_preview(token: &str) -> String {
    // Counted in chars, not bytes, so multibyte tokens cannot split a
    // character boundary.
    let mut chars = token.chars();
    let prefix: String = chars.by_ref().take(PREVIEW_LEN).collect();
    if chars.next().is_some() {
        format!("{prefix}...")
    } else {
        MASKED_PREVIEW.to_owned()
    }
}
