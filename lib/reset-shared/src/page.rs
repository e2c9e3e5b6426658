//! The page template this client was written for renders a
//! reset form, a token attribute and an error display.
//! Every driver of the submit handler (a real page, a
//! terminal, a test double) and the page template itself
//! have to agree on these values, so they live here.

/// Identifier of the form element the submit handler takes
/// over.
pub const FORM_ELEMENT_ID: &str = "resetPasswordForm";

/// Attribute on the page body that carries the reset token.
pub const TOKEN_ATTRIBUTE: &str = "data-token";

/// Identifier of the element failures are written to.
pub const ERROR_ELEMENT_ID: &str = "error-container";

/// Relative location the page navigates to after a
/// successful reset, no matter what the backend answered.
pub const REDIRECT_LOCATION: &str = "base.html";

/// The fixed text shown for every kind of failed reset.
/// The actual cause only appears in the diagnostic log.
pub const RESET_FAILED_TEXT: &str = "Failed to reset password.";

/// Path prefix of the reset endpoint on the backend; the
/// reset token is appended verbatim.
pub const RESET_PATH_PREFIX: &str = "/api/auth/reset_password/";
