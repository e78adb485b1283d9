//! Module `commands`
//!
//! Console command parsing and the data structures used to represent
//! commands and their results.

use std::fmt;

/// Password argument; debug output never shows it.
#[derive(Clone, PartialEq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Password(password.to_string())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// A parsed console command.
///
/// Arguments that may contain spaces (passwords, paths, CSV rows) take the
/// rest of the line.
#[derive(Debug, PartialEq)]
pub enum Command {
    Signup {
        email: String,
        phone: String,
        password: Password,
    },
    Login {
        email: String,
        password: Password,
    },
    Logout,
    WhoAmI,
    Board,
    List,
    Import(String),
    Template(Option<String>),
    Add(String),
    Delete(String),
    Avatar {
        id: String,
        path: String,
    },
    Logo(String),
    Background(String),
    Week(u32),
    Help,
    Quit,
    /// Known verb with missing or malformed arguments; carries the usage line
    Usage(&'static str),
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

pub const HELP_TEXT: &str = "\
SIGNUP <email> <phone> <password>   create a viewer account
LOGIN <email> <password>            log in
LOGOUT                              log out
WHOAMI                              show the current account
BOARD                               show the leaderboard
LIST                                (admin) full roster with ids
IMPORT <file.csv>                   (admin) replace roster from CSV
TEMPLATE [file.csv]                 (admin) write the CSV template
ADD <csv row>                       (admin) add one TSO, template column order
DELETE <id>                         (admin) delete a TSO
AVATAR <id> <image>                 (admin) upload a TSO avatar
LOGO <image>                        (admin) upload the board logo
BACKGROUND <image|video>            (admin) upload the board background
WEEK <n>                            (admin) set the week number
QUIT                                leave";

/// Splits off the next whitespace-delimited word
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], input[at..].trim_start()),
        None => (input, ""),
    }
}

/// Parses a raw console line into a `Command`.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let (verb, rest) = next_word(trimmed);
    let rest = rest.trim();

    match verb.to_ascii_uppercase().as_str() {
        "SIGNUP" => {
            let (email, rest) = next_word(rest);
            let (phone, password) = next_word(rest);
            if email.is_empty() || phone.is_empty() || password.is_empty() {
                return Command::Usage("SIGNUP <email> <phone> <password>");
            }
            Command::Signup {
                email: email.to_string(),
                phone: phone.to_string(),
                password: password.into(),
            }
        }
        "LOGIN" => {
            let (email, password) = next_word(rest);
            if email.is_empty() || password.is_empty() {
                return Command::Usage("LOGIN <email> <password>");
            }
            Command::Login {
                email: email.to_string(),
                password: password.into(),
            }
        }
        "LOGOUT" => Command::Logout,
        "WHOAMI" => Command::WhoAmI,
        "BOARD" => Command::Board,
        "LIST" => Command::List,
        "IMPORT" if !rest.is_empty() => Command::Import(rest.to_string()),
        "IMPORT" => Command::Usage("IMPORT <file.csv>"),
        "TEMPLATE" => Command::Template((!rest.is_empty()).then(|| rest.to_string())),
        "ADD" if !rest.is_empty() => Command::Add(rest.to_string()),
        "ADD" => Command::Usage("ADD <csv row>"),
        "DELETE" | "DEL" if !rest.is_empty() => Command::Delete(rest.to_string()),
        "DELETE" | "DEL" => Command::Usage("DELETE <id>"),
        "AVATAR" => {
            let (id, path) = next_word(rest);
            if id.is_empty() || path.is_empty() {
                return Command::Usage("AVATAR <id> <image>");
            }
            Command::Avatar {
                id: id.to_string(),
                path: path.to_string(),
            }
        }
        "LOGO" if !rest.is_empty() => Command::Logo(rest.to_string()),
        "LOGO" => Command::Usage("LOGO <image>"),
        "BACKGROUND" | "BG" if !rest.is_empty() => Command::Background(rest.to_string()),
        "BACKGROUND" | "BG" => Command::Usage("BACKGROUND <image|video>"),
        "WEEK" => match rest.parse::<u32>() {
            Ok(week) => Command::Week(week),
            Err(_) => Command::Usage("WEEK <n>"),
        },
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
