pub mod commands;
pub mod output;

pub use commands::{Command, COMMANDS};
pub use output::{
    display_error, display_files, display_header, display_help, display_history, display_json,
    display_reply, display_stats, display_turn_stats, display_users, display_warning,
};
