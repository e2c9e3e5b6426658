use std::sync::Arc;

use reset_shared::page::{REDIRECT_LOCATION, RESET_FAILED_TEXT};

use crate::{interface::Io, page::Page, password_reset::password_reset};

/// The submit handler of a password-reset page.
///
/// Bound once the page finished loading, it takes over the
/// form submission: every submit becomes one request to the
/// reset endpoint and ends either in a navigation away from
/// the page or in the fixed failure text, with the page left
/// usable for another attempt. There is no retry, no
/// cancellation and no guard against two submissions being
/// in flight at the same time.
pub struct ResetPasswordSubmitter {
    page: Arc<dyn Page>,
    io: Arc<dyn Io>,
}

impl ResetPasswordSubmitter {
    /// Binds the submit handler to the reset form of the
    /// given page.
    ///
    /// The page has to provide the reset form and the token
    /// attribute. A page without them is a broken embedding;
    /// that case is not defended against here.
    pub const fn bind(page: Arc<dyn Page>, io: Arc<dyn Io>) -> Self {
        Self { page, io }
    }

    /// Handles one submit of the bound form.
    ///
    /// Collects the field values in form order, reads the
    /// token from the page and posts both to the reset
    /// endpoint. On success the page navigates to
    /// [`REDIRECT_LOCATION`](reset_shared::page::REDIRECT_LOCATION),
    /// no matter what the response body contained. On any
    /// kind of failure the error display gets the fixed
    /// failure text; the actual cause only goes to the log.
    pub async fn submit(&self) {
        let form = self.page.form_fields().into_iter().collect();
        let token = self.page.reset_token();

        match password_reset(&form, &token, self.io.as_ref()).await {
            Ok(res) => {
                log::info!("password reset succeeded: {}", res.0);
                self.page.navigate_to(REDIRECT_LOCATION);
            }
            Err(err) => {
                log::warn!("password reset failed: {err}");
                self.page.show_error(RESET_FAILED_TEXT);
            }
        }
    }
}
