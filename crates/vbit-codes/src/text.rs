//! Fixed-width teletext text fields.

/// Fit `text` to exactly `width` characters.
///
/// Shorter text is right-padded with spaces; longer text keeps its first
/// `width` characters.
pub fn fit_width(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - len));
    fitted
}
