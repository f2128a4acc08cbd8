// src/bin/password_tool.rs
//! Interactive password tool: generate, encrypt, decrypt, inspect
//!
//! Keeps the last generated password and the last token around, so
//! `generate 16`, `encrypt`, `decrypt` walks the full round trip.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use encrypted_password_vault::{load_config, CoreError, PasswordVault, Token};
use rpassword::prompt_password;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  generate <length>   generate a random password
  encrypt [text]      encrypt text (default: last generated password, else prompt)
  decrypt [token]     decrypt a token (default: last token)
  inspect [token]     show a token's header as JSON
  help                show this message
  quit                exit (all tokens become undecryptable)";

#[derive(Default)]
struct Session {
    password: Option<String>,
    token: Option<String>,
}

fn main() -> Result<()> {
    let config = load_config().context("Failed to load configuration (check EPV_CONFIG)")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(io::stderr)
        .init();

    let vault = PasswordVault::with_config(&config).context("Invalid generator settings")?;
    let policy = vault.generator().policy();
    info!(
        "Password tool ready (lengths {}..={}, type `help`)",
        policy.min(),
        policy.max()
    );

    let mut session = Session::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, Some(arg.trim())),
            None => (line, None),
        };

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "generate" => match vault.generate_password_from_input(arg.unwrap_or_default()) {
                Ok(password) => {
                    println!("password:  {password}");
                    session.password = Some(password);
                }
                Err(err) => report(&err),
            },
            "encrypt" => {
                let plaintext = match (arg, &session.password) {
                    (Some(text), _) => text.to_owned(),
                    (None, Some(last)) => last.clone(),
                    (None, None) => prompt_password("password (hidden): ")?,
                };
                match vault.encrypt_password(&plaintext) {
                    Ok(token) => {
                        println!("encrypted: {token}");
                        session.token = Some(token);
                    }
                    Err(err) => report(&err),
                }
            }
            "decrypt" => {
                let token = arg.or(session.token.as_deref()).unwrap_or_default();
                match vault.decrypt_password(token) {
                    Ok(plaintext) => println!("decrypted: {plaintext}"),
                    Err(err) => report(&err),
                }
            }
            "inspect" => {
                let token = arg.or(session.token.as_deref()).unwrap_or_default();
                match Token::parse(token) {
                    Ok(token) => println!("{}", serde_json::to_string_pretty(&token.info())?),
                    Err(err) => report(&err),
                }
            }
            other => println!("Error: unknown command `{other}` (try `help`)"),
        }
    }

    info!("Exiting, process key discarded");
    Ok(())
}

fn report(err: &CoreError) {
    debug!("operation failed: {err}");
    println!("Error: {}", user_message(err));
}

fn user_message(err: &CoreError) -> String {
    match err {
        CoreError::InvalidLength { value, min, max } => match value.trim().parse::<usize>() {
            Ok(n) if n < *min => format!("Password length must be at least {min}"),
            Ok(n) if n > *max => format!("Password length must not exceed {max}"),
            _ => "Please enter a valid number for password length".to_owned(),
        },
        CoreError::EmptyInput(kind) => {
            let mut message = format!("{kind} is required");
            message[..1].make_ascii_uppercase();
            message
        }
        CoreError::TokenMalformed(_) | CoreError::Authentication => {
            "Invalid encrypted password".to_owned()
        }
        CoreError::TokenExpired { .. } => "Encrypted password has expired".to_owned(),
        other => other.to_string(),
    }
}
