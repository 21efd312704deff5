//! Terminal front end: reads the form from stdin, shows notices on stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use login_client::configuration::Settings;
use login_client::controller::LoginController;
use login_client::error::LoginErrorEnum;
use login_client::form::CredentialForm;
use login_client::navigation::{Notice, Notifier, Route, Router};
use login_client::session_store::SessionStore;
use secrecy::{ExposeSecret, Secret};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "login-client")]
#[command(about = "Sign in against the configured authentication endpoint")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit credentials and store the returned access token
    Login {
        /// Email or mobile number; prompted for when omitted
        #[arg(short, long)]
        identifier: Option<String>,

        /// Echo the password back once it has been entered
        #[arg(long)]
        show_password: bool,
    },
    /// Report whether an access token is stored
    Token {
        /// Print the token itself
        #[arg(long)]
        reveal: bool,
    },
}

pub async fn run(cli: Cli, config: Settings) -> Result<()> {
    match cli.command {
        Commands::Login {
            identifier,
            show_password,
        } => login(config, identifier, show_password).await,
        Commands::Token { reveal } => token(&config.session.store()?, reveal),
    }
}

#[tracing::instrument(name = "Terminal login", skip(config, identifier))]
async fn login(config: Settings, identifier: Option<String>, show_password: bool) -> Result<()> {
    let mut form = CredentialForm::new();
    let identifier = match identifier {
        Some(identifier) => Some(identifier),
        None => prompt("identifier: ")?,
    };
    if let Some(identifier) = identifier {
        form.set_identifier(identifier);
    }
    let password =
        rpassword::prompt_password("password: ").map_err(LoginErrorEnum::ReadInputError)?;
    form.set_password(Secret::new(password));
    if show_password {
        form.toggle_visibility();
    }
    if form.show_password() {
        eprintln!("password entered: {}", form.password_display());
    }

    let controller = LoginController::new(
        config.auth_client.client()?,
        config.session.store()?,
        TerminalRouter,
        TerminalNotifier,
    );
    controller
        .submit(&form)
        .await
        .context("The login was not completed")?;
    Ok(())
}

fn token(store: &SessionStore, reveal: bool) -> Result<()> {
    match store.read() {
        Some(token) if reveal => println!("{}", token.expose_secret()),
        Some(_) => match store.path() {
            Some(path) => println!(
                "an access token is stored under '{}' in {}",
                store.key(),
                path.display()
            ),
            None => println!("an access token is stored under '{}'", store.key()),
        },
        None => println!("no access token stored"),
    }
    Ok(())
}

/// Read the identifier from stdin. An empty line is an empty identifier;
/// only a closed stdin leaves the field unset.
fn prompt(label: &str) -> Result<Option<String>, LoginErrorEnum> {
    eprint!("{}", label);
    io::stderr().flush().map_err(LoginErrorEnum::ReadInputError)?;
    read_field(io::stdin().lock())
}

fn read_field(mut reader: impl BufRead) -> Result<Option<String>, LoginErrorEnum> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(LoginErrorEnum::ReadInputError)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

struct TerminalRouter;

impl Router for TerminalRouter {
    fn navigate(&self, route: Route) {
        tracing::info!("Navigating to {}", route);
        match route {
            Route::Dashboard => println!("signed in, opening {}", route),
            Route::Login => println!("back to the login screen"),
        }
    }
}

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::LoginSucceeded => println!("{}", notice),
            Notice::LoginFailed { .. } => eprintln!("{}", notice),
        }
    }
}
