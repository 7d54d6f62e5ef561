//! End-to-end tests of the console host with the sample commands.

use std::sync::Arc;

use commandox_cli::config::ConsoleConfig;
use commandox_cli::demo::{self, Team};
use commandox_cli::{ConsoleSender, Host, HostConfig};
use commandox_core::{OnlineEntities, Outcome};

fn host(team: Arc<Team>) -> Host {
    let config = HostConfig::default();
    let entities = OnlineEntities::with_names(["Steve", "Stevenson", "Alex"]);
    let dispatchers = demo::dispatchers(Arc::new(entities), &config.messages, team).unwrap();
    Host::new(config.messages).with_dispatchers(dispatchers)
}

fn console(permissions: &[&str]) -> ConsoleSender<Vec<u8>> {
    let config = ConsoleConfig {
        name: "Ops".to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    };
    ConsoleSender::new(&config, Vec::new())
}

/// Run every line and return what the console printed.
fn session(host: &Host, sender: ConsoleSender<Vec<u8>>, lines: &[&str]) -> Vec<String> {
    for line in lines {
        host.handle_line(&sender, line);
    }
    String::from_utf8(sender.into_inner())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

mod roster {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_via_alias_and_list() {
        let team = Arc::new(Team::default());
        let host = host(Arc::clone(&team));
        let out = session(
            &host,
            console(&["*"]),
            &["/team group add ste officer", "t invite alex", "/squad"],
        );

        assert_eq!(
            out,
            vec![
                "Steve joined the team as officer.",
                "Alex joined the team as member.",
                "Team (2/10): Steve (officer), Alex (member)",
            ]
        );
        assert_eq!(team.members().len(), 2);
    }

    #[test]
    fn test_duplicate_and_remove() {
        let host = host(Arc::new(Team::default()));
        let out = session(
            &host,
            console(&["*"]),
            &[
                "team add alex",
                "team add ALEX",
                "team kick Alex",
                "team group remove Alex",
                "team",
            ],
        );
        assert_eq!(
            out,
            vec![
                "Alex joined the team as member.",
                "Alex is already on the team.",
                "Alex left the team.",
                "Alex is not on the team.",
                "The team is empty (0/10).",
            ]
        );
    }

    #[test]
    fn test_limit_and_toggle() {
        let team = Arc::new(Team::default());
        let host = host(Arc::clone(&team));
        let out = session(
            &host,
            console(&["*"]),
            &[
                "team set limit 1",
                "team limit",
                "team add steve",
                "team add alex",
                "team toggle",
                "team add alex",
                "team toggle yes",
            ],
        );
        assert_eq!(
            out,
            vec![
                "Team limit set to 1.",
                "Team limit: 1",
                "Steve joined the team as member.",
                "The team is full (1 members).",
                "The team is now closed.",
                "The team is closed.",
                "The team is now open.",
            ]
        );
        assert_eq!(team.limit(), 1);
        assert!(team.is_open());
    }

    #[test]
    fn test_say_keeps_whole_message() {
        let host = host(Arc::new(Team::default()));
        let out = session(&host, console(&["team.use"]), &["team broadcast meet at   spawn"]);
        assert_eq!(out, vec!["[Team] Ops: meet at spawn"]);
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_permissions() {
        let host = host(Arc::new(Team::default()));
        let out = session(
            &host,
            console(&["team.use"]),
            &["team add steve", "team limit 5", "online ste"],
        );
        assert_eq!(
            out,
            vec![
                "You don't have permission to use this subcommand.",
                "Only team managers can change the limit.",
                "Steve is online.",
            ]
        );

        let out = session(&host, console(&[]), &["team"]);
        assert_eq!(out, vec!["You don't have permission to use this command."]);
    }

    #[test]
    fn test_binding_errors_show_usage() {
        let host = host(Arc::new(Team::default()));
        let out = session(
            &host,
            console(&["*"]),
            &["team limit 99", "team add notch", "team say", "team add alex officer now"],
        );
        assert_eq!(
            out,
            vec![
                "Maximum value for 'size' is 50.",
                "Correct usage: /team limit [size:int]",
                "Player 'notch' not found.",
                "Correct usage: /team add <target:player> [role:member|officer]",
                "Missing required argument: message",
                "Correct usage: /team say <message...:raw>",
                "Too many arguments.",
            ]
        );
    }

    #[test]
    fn test_unknown_command() {
        let host = host(Arc::new(Team::default()));
        let out = session(&host, console(&["*"]), &["warp home", ""]);
        assert_eq!(out, vec!["Unknown command 'warp'."]);
    }
}

mod help {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_help_lists_permitted_subcommands() {
        let host = host(Arc::new(Team::default()));
        let out = session(&host, console(&["team.use"]), &["team ?"]);
        assert_eq!(
            out,
            vec![
                "/team commands:",
                "/team say <message...:raw> - Send a message to the team",
                "/team help - List team commands",
            ]
        );
    }

    #[test]
    fn test_outcomes() {
        let host = host(Arc::new(Team::default()));
        let sender = console(&["*"]);
        assert_eq!(host.handle_line(&sender, "team help"), Some(Outcome::Executed));
        assert_eq!(host.handle_line(&sender, "team limit x"), Some(Outcome::InvalidArguments));
        assert_eq!(host.handle_line(&sender, "who"), Some(Outcome::Executed));
    }
}
