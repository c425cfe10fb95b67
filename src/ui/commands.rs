use crate::models::Category;

/// Slash commands understood by the interactive shell.
pub const COMMANDS: &[&str] = &[
    "/add", "/category", "/clear", "/debug", "/file", "/files", "/filter", "/help", "/history",
    "/newuser", "/quit", "/stats", "/temp", "/user", "/users",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Empty,
    Send(String),
    ToggleDebug,
    Clear,
    SetUser(String),
    CreateUser { user_id: String, provision: bool },
    SetTemperature(f32),
    SetCategory(Category),
    Stats,
    Users,
    Files,
    ReadFile(String),
    History(Option<u32>),
    AddData { file_name: String, raw_json: String },
    Filter { file_name: String, raw_json: String },
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }
        if !line.starts_with('/') {
            return Ok(Command::Send(line.to_string()));
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/debug" => Ok(Command::ToggleDebug),
            "/clear" => Ok(Command::Clear),
            "/stats" => Ok(Command::Stats),
            "/users" => Ok(Command::Users),
            "/files" => Ok(Command::Files),
            "/help" => Ok(Command::Help),
            "/quit" | "/exit" => Ok(Command::Quit),
            "/user" => required(rest, "/user <id>").map(|id| Command::SetUser(id.to_string())),
            "/newuser" => {
                let mut provision = false;
                let mut user_id = None;
                for part in rest.split_whitespace() {
                    match part {
                        "--provision" | "-p" => provision = true,
                        other if user_id.is_none() => user_id = Some(other.to_string()),
                        other => return Err(format!("Unexpected argument '{}'", other)),
                    }
                }
                user_id
                    .map(|user_id| Command::CreateUser { user_id, provision })
                    .ok_or_else(|| "Usage: /newuser <id> [--provision]".to_string())
            }
            "/temp" => required(rest, "/temp <0.0-2.0>")?
                .parse::<f32>()
                .map(Command::SetTemperature)
                .map_err(|_| format!("'{}' is not a number", rest)),
            "/category" => required(rest, "/category <code>")?
                .parse::<Category>()
                .map(Command::SetCategory),
            "/file" => required(rest, "/file <name>").map(|n| Command::ReadFile(n.to_string())),
            "/history" => {
                if rest.is_empty() {
                    Ok(Command::History(None))
                } else {
                    rest.parse::<u32>()
                        .map(|limit| Command::History(Some(limit)))
                        .map_err(|_| format!("'{}' is not a valid limit", rest))
                }
            }
            "/add" => file_and_json(rest, "/add <file> <json>").map(|(file_name, raw_json)| {
                Command::AddData {
                    file_name,
                    raw_json,
                }
            }),
            "/filter" => {
                file_and_json(rest, "/filter <file> <json>").map(|(file_name, raw_json)| {
                    Command::Filter {
                        file_name,
                        raw_json,
                    }
                })
            }
            other => Err(format!("Unknown command '{}'. Type /help for a list.", other)),
        }
    }
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(rest)
    }
}

fn file_and_json(rest: &str, usage: &str) -> Result<(String, String), String> {
    match rest.split_once(char::is_whitespace) {
        Some((file, json)) if !json.trim().is_empty() => {
            Ok((file.to_string(), json.trim().to_string()))
        }
        _ => Err(format!("Usage: {}", usage)),
    }
}
