use reset_shared::token::ResetToken;

/// The hosting page as the submit handler sees it.
///
/// An implementation is whatever surface embeds the reset
/// form: a rendered page, a terminal, a test double. The
/// methods mirror what the page template promises to render:
/// the form itself, a body attribute with the reset token
/// and an element to write failures to
/// (`reset_shared::page` names them).
///
/// Binding a submit handler replaces the page's own
/// submission; a page must not additionally submit the form
/// in its native way.
pub trait Page: Sync + Send {
    /// Current values of the form fields, in the order they
    /// appear in the form. Read freshly for every submit.
    fn form_fields(&self) -> Vec<(String, String)>;
    /// The reset token the page carries. Pages without it
    /// are broken embeddings; there is no fallback.
    fn reset_token(&self) -> ResetToken;
    /// Replaces the text of the error display element.
    fn show_error(&self, text: &str);
    /// Leaves the page towards `location`, relative to the
    /// page itself.
    fn navigate_to(&self, location: &str);
}
