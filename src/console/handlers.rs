//! Command handlers for the leaderboard console.
//!
//! Each handler runs one operation against the `App` and turns its outcome
//! into a reply. Failures never end the session.

use log::info;
use std::path::Path;

use super::commands::{Command, CommandResult, CommandStatus, HELP_TEXT};
use super::render::{render_board, render_roster, render_session};
use super::responses::{
    BAD_REQUEST, COMMAND_ERROR, CREATED, GOODBYE, LOGIN_SUCCESS, OK, format_response,
};
use crate::app::App;
use crate::error::LeaderboardError;
use crate::error::handlers::{error_to_reply_code, handle_error};
use crate::roster::TEMPLATE_FILENAME;

fn success(code: u16, message: impl AsRef<str>) -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        message: Some(format_response(code, message.as_ref())),
    }
}

fn failure(err: LeaderboardError) -> CommandResult {
    handle_error(&err);
    let message = err.to_string();
    CommandResult {
        message: Some(format_response(error_to_reply_code(&err), &message)),
        status: CommandStatus::Failure(message),
    }
}

/// Dispatches a parsed command to its handler.
pub async fn handle_command(app: &mut App, command: &Command) -> CommandResult {
    match command {
        Command::Signup {
            email,
            phone,
            password,
        } => handle_cmd_signup(app, email, phone, password.as_str()),
        Command::Login { email, password } => handle_cmd_login(app, email, password.as_str()),
        Command::Logout => handle_cmd_logout(app),
        Command::WhoAmI => match app.whoami() {
            Ok(session) => success(OK, render_session(session)),
            Err(e) => failure(e),
        },
        Command::Board => handle_cmd_board(app),
        Command::List => match app.roster() {
            Ok(records) => success(OK, render_roster(&records)),
            Err(e) => failure(e),
        },
        Command::Import(path) => handle_cmd_import(app, path).await,
        Command::Template(path) => handle_cmd_template(app, path.as_deref()).await,
        Command::Add(row) => match app.add_record(row) {
            Ok(id) => success(CREATED, format!("TSO added: {id}")),
            Err(e) => failure(e),
        },
        Command::Delete(id) => match app.delete_record(id) {
            Ok(removed) => success(OK, format!("TSO deleted successfully: {}", removed.name)),
            Err(e) => failure(e),
        },
        Command::Avatar { id, path } => {
            match app.upload_avatar(id, Path::new(path)).await {
                Ok(()) => success(OK, "Image uploaded successfully"),
                Err(e) => failure(e),
            }
        }
        Command::Logo(path) => match app.upload_logo(Path::new(path)).await {
            Ok(()) => success(OK, "Logo uploaded successfully"),
            Err(e) => failure(e),
        },
        Command::Background(path) => match app.upload_background(Path::new(path)).await {
            Ok(kind) => success(
                OK,
                format!("Background {} uploaded successfully", kind.as_str()),
            ),
            Err(e) => failure(e),
        },
        Command::Week(week) => match app.set_week(*week) {
            Ok(()) => success(OK, format!("Week set to {week}")),
            Err(e) => failure(e),
        },
        Command::Help => success(OK, format!("Commands:\n{HELP_TEXT}")),
        Command::Quit => handle_cmd_quit(),
        Command::Usage(usage) => CommandResult {
            status: CommandStatus::Failure("Bad arguments".into()),
            message: Some(format_response(BAD_REQUEST, &format!("Usage: {usage}"))),
        },
        Command::Unknown(_) => CommandResult {
            status: CommandStatus::Failure("Unknown command".into()),
            message: Some(format_response(COMMAND_ERROR, "Unknown command (try HELP)")),
        },
    }
}

fn handle_cmd_signup(app: &mut App, email: &str, phone: &str, password: &str) -> CommandResult {
    match app.signup(email, phone, password) {
        Ok(session) => success(
            CREATED,
            format!("Account created successfully: {}", render_session(&session)),
        ),
        Err(e) => failure(e),
    }
}

fn handle_cmd_login(app: &mut App, email: &str, password: &str) -> CommandResult {
    match app.login(email, password) {
        Ok(session) => success(
            LOGIN_SUCCESS,
            format!("Login successful: {}", render_session(&session)),
        ),
        Err(e) => failure(e),
    }
}

fn handle_cmd_logout(app: &mut App) -> CommandResult {
    match app.logout() {
        Ok(()) => success(OK, "Logged out successfully"),
        Err(e) => failure(e),
    }
}

fn handle_cmd_board(app: &App) -> CommandResult {
    match app.board() {
        Ok(standings) => {
            let state = app.state();
            success(
                OK,
                render_board(&standings, state.board().week_number, state.branding()),
            )
        }
        Err(e) => failure(e),
    }
}

async fn handle_cmd_import(app: &mut App, path: &str) -> CommandResult {
    match app.import_csv_file(Path::new(path)).await {
        Ok(count) => success(OK, format!("Successfully imported {count} TSOs from CSV")),
        Err(e) => failure(e),
    }
}

async fn handle_cmd_template(app: &App, path: Option<&str>) -> CommandResult {
    let path = Path::new(path.unwrap_or(TEMPLATE_FILENAME));
    match app.write_template(path).await {
        Ok(written) => success(OK, format!("Template written to {}", written.display())),
        Err(e) => failure(e),
    }
}

fn handle_cmd_quit() -> CommandResult {
    info!("Console session ended by operator");
    CommandResult {
        status: CommandStatus::Exit,
        message: Some(format_response(GOODBYE, "Goodbye")),
    }
}
