use crate::api::BackendClient;
use crate::browser::Browser;
use crate::config::Config;
use crate::identity::IdentityManager;
use crate::orchestrator::Orchestrator;
use crate::session::Session;
use crate::ui::{self, Command, COMMANDS};
use colored::*;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};

/// Completion and hints for slash commands.
struct CommandHelper;

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.starts_with('/') && !line.contains(' ') {
            COMMANDS
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }
}

impl Validator for CommandHelper {}

/// Everything one interactive run needs. Each command touches it from the
/// single REPL loop only.
pub struct Shell<'a> {
    config: &'a Config,
    client: &'a BackendClient,
    identity: IdentityManager<'a>,
    pub session: Session,
}

impl<'a> Shell<'a> {
    pub fn new(config: &'a Config, client: &'a BackendClient, session: Session) -> Self {
        Self {
            config,
            client,
            identity: IdentityManager::new(client),
            session,
        }
    }

    /// Apply one command. Returns `false` when the shell should exit.
    pub async fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Empty => {}
            Command::Send(text) => {
                let outcome = Orchestrator::new(self.client)
                    .submit(&mut self.session, &text)
                    .await;
                ui::display_reply(&outcome.reply, outcome.stats.has_error);
                if self.session.debug() {
                    ui::display_turn_stats(&outcome.stats);
                }
            }
            Command::ToggleDebug => {
                let enabled = self.session.toggle_debug();
                println!(
                    "{}",
                    format!("Debug mode {}", if enabled { "on" } else { "off" }).cyan()
                );
            }
            Command::Clear => {
                self.session.reset();
                println!("{}", "Started a new conversation.".green());
            }
            Command::SetUser(user_id) => {
                match self.identity.set_current(&mut self.session, &user_id) {
                    Ok(()) => println!(
                        "{}",
                        format!("Now chatting as {}", self.session.current_user()).green()
                    ),
                    Err(e) => ui::display_error(&e.to_string()),
                }
            }
            Command::CreateUser { user_id, provision } => {
                match self
                    .identity
                    .create_user(&mut self.session, &user_id, provision)
                    .await
                {
                    Ok(outcome) => {
                        println!("{}", format!("User {} added", user_id).green());
                        if let Some(warning) = outcome.warning() {
                            ui::display_warning(&warning);
                        }
                    }
                    Err(e) => ui::display_error(&e.to_string()),
                }
            }
            Command::SetTemperature(value) => match self.session.set_temperature(value) {
                Ok(()) => println!(
                    "{}",
                    format!("Temperature set to {}", self.session.temperature()).green()
                ),
                Err(e) => ui::display_error(&e.to_string()),
            },
            Command::SetCategory(category) => {
                self.session.set_category(category);
                println!("{}", format!("Category set to {}", category).green());
            }
            Command::Stats => ui::display_stats(&self.session),
            Command::Users => ui::display_users(&self.session),
            Command::Files => {
                let browser = Browser::new(self.client);
                match browser.list_files(self.session.current_user()).await {
                    Ok(files) => ui::display_files(&files),
                    Err(e) => ui::display_error(&e.to_string()),
                }
            }
            Command::ReadFile(name) => {
                let browser = Browser::new(self.client);
                match browser.read_file(self.session.current_user(), &name).await {
                    Ok(data) => ui::display_json(&data),
                    Err(e) => ui::display_error(&e.to_string()),
                }
            }
            Command::History(limit) => {
                let browser = Browser::new(self.client);
                let limit = limit.unwrap_or(self.config.history_limit);
                match browser
                    .interaction_history(self.session.current_user(), limit)
                    .await
                {
                    Ok(entries) => ui::display_history(&entries),
                    Err(e) => ui::display_error(&e.to_string()),
                }
            }
            Command::AddData {
                file_name,
                raw_json,
            } => {
                let browser = Browser::new(self.client);
                match browser
                    .add_data(
                        self.session.current_user(),
                        &file_name,
                        &raw_json,
                        self.session.category(),
                    )
                    .await
                {
                    Ok(response) => {
                        println!("{}", format!("Record added to {}", file_name).green());
                        if self.session.debug() {
                            ui::display_json(&response);
                        }
                    }
                    Err(e) => ui::display_error(&e.to_string()),
                }
            }
            Command::Filter {
                file_name,
                raw_json,
            } => {
                let browser = Browser::new(self.client);
                match browser
                    .filtered_data(self.session.current_user(), &file_name, &raw_json)
                    .await
                {
                    Ok(rows) => ui::display_json(&serde_json::Value::Array(rows)),
                    Err(e) => ui::display_error(&e.to_string()),
                }
            }
            Command::Help => ui::display_help(),
            Command::Quit => return false,
        }
        true
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut editor: Editor<CommandHelper, DefaultHistory> = Editor::new()?;
        editor.set_helper(Some(CommandHelper));

        ui::display_header(&self.session);

        loop {
            let prompt = format!("{}> ", self.session.current_user());
            match editor.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    match Command::parse(&line) {
                        Ok(command) => {
                            if !self.handle(command).await {
                                break;
                            }
                        }
                        Err(message) => ui::display_error(&message),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        println!("{}", "Goodbye!".bright_green());
        Ok(())
    }
}
