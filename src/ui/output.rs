use crate::models::TurnStatistics;
use crate::session::Session;
use colored::*;
use serde_json::Value;

pub fn display_header(session: &Session) {
    println!("{}", "=== OmniFlow Assistant ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "User: {} | Category: {} | Temperature: {}",
            session.current_user(),
            session.category(),
            session.temperature()
        )
        .dimmed()
    );
    println!("{}", "Type a message to chat, /help for commands.".dimmed());
    println!();
}

pub fn display_reply(text: &str, has_error: bool) {
    if has_error {
        println!("{}", text.red());
    } else {
        for line in text.lines() {
            println!("{}", line.bright_blue());
        }
    }
    println!();
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow(), message);
}

/// One-line statistics for the turn that just finished.
pub fn display_turn_stats(stats: &TurnStatistics) {
    let status = if stats.has_error { "error".red() } else { "ok".green() };
    println!(
        "{} {}",
        format!(
            "[{}] {:.2}s | tools: {} | thread: {} | temp: {:.2} |",
            stats.timestamp.format("%H:%M:%S"),
            stats.response_time,
            stats.tool_calls_count,
            stats.thread_id.as_deref().unwrap_or("-"),
            stats.temperature
        )
        .dimmed(),
        status
    );
    if let Some(detail) = &stats.error_detail {
        println!("{}", format!("  {}", detail).dimmed());
    }
}

pub fn display_stats(session: &Session) {
    let summary = session.summary();
    let secs = |v: Option<f64>| v.map(|s| format!("{:.2}s", s)).unwrap_or_else(|| "-".to_string());

    println!("{}", "Session statistics".cyan().bold());
    println!("  Session:        {}", session.id());
    println!("  Started:        {}", session.created_at().format("%H:%M:%S"));
    println!("  User:           {}", session.current_user());
    println!("  Thread:         {}", session.thread_id().unwrap_or("-"));
    println!("  Exchanges:      {}", summary.total_exchanges);
    println!("  Tool calls:     {}", summary.total_tool_calls);
    println!("  Errors:         {}", summary.error_count);
    println!("  Last response:  {}", secs(summary.last_response_time));
    println!("  Avg response:   {}", secs(summary.average_response_time));
    println!(
        "  Debug:          {}",
        if session.debug() { "on" } else { "off" }
    );
    println!();
}

pub fn display_users(session: &Session) {
    println!("{}", "Known users".cyan().bold());
    for user in session.known_users() {
        if user == session.current_user() {
            println!("  {} {}", "*".green(), user.green());
        } else {
            println!("    {}", user);
        }
    }
    println!();
}

pub fn display_files(files: &[String]) {
    if files.is_empty() {
        println!("{}", "No files yet".dimmed());
    } else {
        println!("{}", format!("Files ({})", files.len()).cyan().bold());
        for file in files {
            println!("  {}", file);
        }
    }
    println!();
}

pub fn display_history(entries: &[Value]) {
    if entries.is_empty() {
        println!("{}", "No interactions recorded".dimmed());
        println!();
        return;
    }

    println!("{}", format!("Recent interactions ({})", entries.len()).cyan().bold());
    for entry in entries {
        let when = entry
            .get("timestamp")
            .and_then(|t| t.as_str())
            .unwrap_or("-");
        let text = entry
            .get("user_message")
            .or_else(|| entry.get("message"))
            .and_then(|m| m.as_str())
            .map(|m| m.to_string())
            .unwrap_or_else(|| entry.to_string());
        println!("  {} {}", when.dimmed(), text);
    }
    println!();
}

pub fn display_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{}", pretty),
        Err(_) => println!("{}", value),
    }
    println!();
}

pub fn display_help() {
    let rows = [
        ("<text>", "Send a message to the assistant"),
        ("/debug", "Toggle per-turn statistics"),
        ("/clear", "Start a new conversation"),
        ("/user <id>", "Switch the active user"),
        ("/newuser <id> [--provision]", "Register a user, optionally on the backend"),
        ("/users", "List known users"),
        ("/temp <0.0-2.0>", "Set the sampling temperature"),
        ("/category <code>", "Set the knowledge category"),
        ("/stats", "Show session statistics"),
        ("/files", "List your backend files"),
        ("/file <name>", "Show the content of a file"),
        ("/history [limit]", "Show recent interactions"),
        ("/add <file> <json>", "Append a JSON record to a file"),
        ("/filter <file> <json>", "Query a file with JSON filters"),
        ("/quit", "Exit"),
    ];

    println!("{}", "Commands".cyan().bold());
    for (command, description) in rows {
        println!("  {:<30} {}", command.bright_cyan(), description.dimmed());
    }
    println!();
}
