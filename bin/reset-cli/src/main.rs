//! A terminal stand-in for the password reset page.
//!
//! It fills the reset form from the command line, drives one
//! submit against a reset server and reports how the page
//! flow ended.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

use std::sync::Arc;

use clap::{command, Arg, ArgAction};
use client_reqwest::client::ClientReqwest;
use parking_lot::Mutex;
use reset_client::{page::Page, submitter::ResetPasswordSubmitter};
use reset_shared::token::ResetToken;
use url::Url;

/// What the page flow ended in.
#[derive(Debug, Default)]
struct PageOutcome {
    /// The location the page navigated to, if the reset
    /// was accepted.
    redirected_to: Option<String>,
}

/// The terminal version of the reset page.
///
/// The form fields and the token come from the command
/// line instead of the document, the error display is
/// stderr and a navigation is a line on stdout.
#[derive(Debug)]
struct TermPage {
    fields: Vec<(String, String)>,
    token: String,
    outcome: Arc<Mutex<PageOutcome>>,
}

impl Page for TermPage {
    fn form_fields(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }
    fn reset_token(&self) -> ResetToken {
        self.token.as_str().into()
    }
    fn show_error(&self, text: &str) {
        eprintln!("{text}");
    }
    fn navigate_to(&self, location: &str) {
        println!("continue at {location}");
        self.outcome.lock().redirected_to = Some(location.to_string());
    }
}

#[tokio::main]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let mut cmd = command!()
        .about("Submits a password reset form to a reset server.")
        .arg(
            Arg::new("server-url")
                .long("server-url")
                .help("The base url of the server the reset form posts to, e.g. http://localhost:8080/ .")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .help("The one time reset token the page was opened with.")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("field")
                .long("field")
                .help("A form field as name=value, kept in the given order. Can be used multiple times.")
                .required(false)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("new-password")
                .long("new-password")
                .help("Short for --field new_password=<value>, appended after all other fields.")
                .required(false)
                .action(ArgAction::Set),
        );
    cmd.build();
    let m = cmd.get_matches();

    let mut fields: Vec<(String, String)> = Default::default();
    if let Some(values) = m.get_many::<String>("field") {
        for field in values {
            let Some((name, value)) = field.split_once('=') else {
                log::error!("form fields are given as name=value, got: {field}");
                panic!("invalid form field, see log for more information");
            };
            fields.push((name.to_string(), value.to_string()));
        }
    }
    if let Some(new_password) = m.get_one::<String>("new-password") {
        fields.push(("new_password".to_string(), new_password.clone()));
    }

    // both args are required, clap already verified they exist
    let token = m.get_one::<String>("token").unwrap().clone();
    let url = m.get_one::<String>("server-url").unwrap();
    let Ok(url) = Url::parse(url) else {
        log::error!("the server url has to be an absolute url, e.g. http://localhost:8080/");
        panic!("invalid server url, see log for more information");
    };

    let outcome: Arc<Mutex<PageOutcome>> = Default::default();
    let page = Arc::new(TermPage {
        fields,
        token,
        outcome: outcome.clone(),
    });
    let io = Arc::new(ClientReqwest::new(url).unwrap());

    ResetPasswordSubmitter::bind(page, io).submit().await;

    if outcome.lock().redirected_to.is_none() {
        panic!("password reset failed, see log for more information");
    }
}
