use omniflow::api::BackendClient;
use omniflow::cli::Args;
use omniflow::config::{Config, FileConfig};
use omniflow::models::{Category, Temperature};
use omniflow::repl::Shell;
use omniflow::session::Session;
use omniflow::ui::Command;
use std::time::Duration;

#[test]
fn test_plain_text_is_a_message() {
    assert_eq!(
        Command::parse("  what is on my list?  ").unwrap(),
        Command::Send("what is on my list?".to_string())
    );
    assert_eq!(Command::parse("   ").unwrap(), Command::Empty);
}

#[test]
fn test_simple_commands() {
    assert_eq!(Command::parse("/debug").unwrap(), Command::ToggleDebug);
    assert_eq!(Command::parse("/clear").unwrap(), Command::Clear);
    assert_eq!(Command::parse("/stats").unwrap(), Command::Stats);
    assert_eq!(Command::parse("/users").unwrap(), Command::Users);
    assert_eq!(Command::parse("/files").unwrap(), Command::Files);
    assert_eq!(Command::parse("/help").unwrap(), Command::Help);
    assert_eq!(Command::parse("/quit").unwrap(), Command::Quit);
    assert_eq!(Command::parse("/exit").unwrap(), Command::Quit);
}

#[test]
fn test_user_commands() {
    assert_eq!(
        Command::parse("/user alice").unwrap(),
        Command::SetUser("alice".to_string())
    );
    assert!(Command::parse("/user").is_err());

    assert_eq!(
        Command::parse("/newuser bob --provision").unwrap(),
        Command::CreateUser {
            user_id: "bob".to_string(),
            provision: true
        }
    );
    assert_eq!(
        Command::parse("/newuser bob").unwrap(),
        Command::CreateUser {
            user_id: "bob".to_string(),
            provision: false
        }
    );
    assert!(Command::parse("/newuser --provision").is_err());
    assert!(Command::parse("/newuser bob carol").is_err());
}

#[test]
fn test_settings_commands() {
    assert_eq!(
        Command::parse("/temp 1.5").unwrap(),
        Command::SetTemperature(1.5)
    );
    assert!(Command::parse("/temp hot").is_err());
    assert_eq!(
        Command::parse("/category gen").unwrap(),
        Command::SetCategory(Category::Gen)
    );
    assert!(Command::parse("/category XX").is_err());
}

#[test]
fn test_browser_commands() {
    assert_eq!(
        Command::parse("/file tasks.json").unwrap(),
        Command::ReadFile("tasks.json".to_string())
    );
    assert_eq!(Command::parse("/history").unwrap(), Command::History(None));
    assert_eq!(Command::parse("/history 20").unwrap(), Command::History(Some(20)));
    assert!(Command::parse("/history many").is_err());

    assert_eq!(
        Command::parse(r#"/add tasks.json {"task": "call mom"}"#).unwrap(),
        Command::AddData {
            file_name: "tasks.json".to_string(),
            raw_json: r#"{"task": "call mom"}"#.to_string()
        }
    );
    assert_eq!(
        Command::parse(r#"/filter tasks.json {"done": true}"#).unwrap(),
        Command::Filter {
            file_name: "tasks.json".to_string(),
            raw_json: r#"{"done": true}"#.to_string()
        }
    );
    assert!(Command::parse("/add tasks.json").is_err());
}

#[test]
fn test_unknown_command() {
    let err = Command::parse("/launch").unwrap_err();
    assert!(err.contains("/launch"));
}

#[tokio::test]
async fn test_shell_user_switch_uses_trimmed_parse() {
    let config = Config::from_sources(&Args::default(), &FileConfig::default(), |_| None).unwrap();
    let client = BackendClient::new("http://127.0.0.1:1/api", None, Duration::from_secs(1)).unwrap();
    let session = Session::new("default_user", Temperature::default(), Category::default());
    let mut shell = Shell::new(&config, &client, session);

    let command = Command::parse("/user   alice  ").unwrap();
    assert!(shell.handle(command).await);
    assert_eq!(shell.session.current_user(), "alice");

    assert!(shell.handle(Command::SetUser(" carol ".to_string())).await);
    assert_eq!(shell.session.current_user(), "alice");
}
