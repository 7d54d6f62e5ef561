//! Sample commands registered by the console host.
//!
//! `/team` manages a small in-memory roster and shows off every argument
//! kind, two-word aliases and per-subcommand permissions. `/online` lists
//! the entity registry.

use std::sync::Arc;

use anyhow::{Context, Result};
use commandox_core::prelude::*;
use parking_lot::Mutex;

pub const TEAM_USE: &str = "team.use";
pub const TEAM_MANAGE: &str = "team.manage";

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: i64 = 50;

// ============================================================
// TEAM STATE
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub role: String,
}

#[derive(Debug)]
struct Roster {
    members: Vec<Member>,
    limit: usize,
    open: bool,
}

/// Shared roster handed to the `/team` handlers as the owner handle.
#[derive(Debug)]
pub struct Team {
    roster: Mutex<Roster>,
}

impl Default for Team {
    fn default() -> Self {
        Self {
            roster: Mutex::new(Roster {
                members: Vec::new(),
                limit: DEFAULT_LIMIT,
                open: true,
            }),
        }
    }
}

impl Team {
    pub fn members(&self) -> Vec<Member> {
        self.roster.lock().members.clone()
    }

    pub fn limit(&self) -> usize {
        self.roster.lock().limit
    }

    pub fn is_open(&self) -> bool {
        self.roster.lock().open
    }
}

fn team<'a>(ctx: &InvocationContext<'a>) -> Result<&'a Team> {
    ctx.owner::<Team>().context("team state is not attached")
}

// ============================================================
// HANDLERS
// ============================================================

fn show_roster(ctx: &InvocationContext<'_>) -> Result<()> {
    let team = team(ctx)?;
    let roster = team.roster.lock();
    if roster.members.is_empty() {
        ctx.reply(format!("§6The team is empty (0/{}).", roster.limit));
        return Ok(());
    }

    let names: Vec<String> = roster
        .members
        .iter()
        .map(|m| format!("{} ({})", m.name, m.role))
        .collect();
    ctx.reply(format!(
        "§6Team ({}/{}): §f{}",
        roster.members.len(),
        roster.limit,
        names.join(", ")
    ));
    Ok(())
}

fn add_member(ctx: &InvocationContext<'_>) -> Result<()> {
    let target = ctx.args().entity("target").context("target was not bound")?;
    let role = ctx.args().str("role").unwrap_or("member");
    let team = team(ctx)?;
    let mut roster = team.roster.lock();

    if !roster.open {
        ctx.reply("§cThe team is closed.");
    } else if roster
        .members
        .iter()
        .any(|m| m.name.eq_ignore_ascii_case(target))
    {
        ctx.reply(format!("§e{target} is already on the team."));
    } else if roster.members.len() >= roster.limit {
        ctx.reply(format!("§cThe team is full ({} members).", roster.limit));
    } else {
        roster.members.push(Member {
            name: target.to_string(),
            role: role.to_string(),
        });
        ctx.reply(format!("§a{target} joined the team as {role}."));
    }
    Ok(())
}

fn remove_member(ctx: &InvocationContext<'_>) -> Result<()> {
    let target = ctx.args().str("target").context("target was not bound")?;
    let team = team(ctx)?;
    let mut roster = team.roster.lock();

    match roster
        .members
        .iter()
        .position(|m| m.name.eq_ignore_ascii_case(target))
    {
        Some(index) => {
            let member = roster.members.remove(index);
            ctx.reply(format!("§a{} left the team.", member.name));
        }
        None => ctx.reply(format!("§c{target} is not on the team.")),
    }
    Ok(())
}

fn set_limit(ctx: &InvocationContext<'_>) -> Result<()> {
    let team = team(ctx)?;
    let mut roster = team.roster.lock();

    match ctx.args().int("size") {
        Some(size) => {
            roster.limit = usize::try_from(size).context("limit is negative")?;
            ctx.reply(format!("§aTeam limit set to {size}."));
        }
        None => ctx.reply(format!("§6Team limit: §f{}", roster.limit)),
    }
    Ok(())
}

fn say(ctx: &InvocationContext<'_>) -> Result<()> {
    let message = ctx.args().str("message").unwrap_or_default();
    ctx.reply(format!("§9[Team] §f{}: {message}", ctx.sender().name()));
    Ok(())
}

fn toggle_open(ctx: &InvocationContext<'_>) -> Result<()> {
    let team = team(ctx)?;
    let mut roster = team.roster.lock();
    roster.open = ctx.args().bool("open").unwrap_or(!roster.open);
    if roster.open {
        ctx.reply("§aThe team is now open.");
    } else {
        ctx.reply("§eThe team is now closed.");
    }
    Ok(())
}

/// Lists the subcommands the sender may use, with their usage.
fn help(ctx: &InvocationContext<'_>) -> Result<()> {
    let root = ctx.root();
    ctx.reply(format!("§6/{} commands:", root.name()));
    for sub in root.subcommands() {
        if !sub.check_permission(ctx.sender()) {
            continue;
        }
        let usage = sub.arguments().usage();
        let syntax = if usage.is_empty() {
            format!("/{} {}", root.name(), sub.name())
        } else {
            format!("/{} {} {usage}", root.name(), sub.name())
        };
        ctx.reply(format!("§e{syntax} §7- {}", sub.description()));
    }
    Ok(())
}

fn online(ctx: &InvocationContext<'_>) -> Result<()> {
    match ctx.args().entity("name") {
        Some(name) => ctx.reply(format!("§a{name} is online.")),
        None => ctx.reply("§7Usage: /online <name> to look someone up."),
    }
    Ok(())
}

// ============================================================
// DEFINITIONS
// ============================================================

/// The `/team` root command.
pub fn team_command() -> Result<RootCommand, DefinitionError> {
    let add = SubCommand::builder("add")
        .aliases(["group add", "invite"])
        .description("Add an online player to the team")
        .permission(TEAM_MANAGE)
        .arguments(ArgumentList::new([
            Argument::entity("target"),
            Argument::one_of("role", ["member", "officer"]).optional(),
        ])?)
        .on_run(add_member)
        .build()?;

    let remove = SubCommand::builder("remove")
        .aliases(["group remove", "kick"])
        .description("Remove a player from the team")
        .permission(TEAM_MANAGE)
        .arguments(ArgumentList::new([Argument::string("target")])?)
        .on_run(remove_member)
        .build()?;

    let limit = SubCommand::builder("limit")
        .alias("set limit")
        .description("Show or change the member limit")
        .permission(TEAM_MANAGE)
        .permission_message("§cOnly team managers can change the limit.")
        .arguments(ArgumentList::new([
            Argument::integer_between("size", 1, MAX_LIMIT).optional(),
        ])?)
        .on_run(set_limit)
        .build()?;

    let say_sub = SubCommand::builder("say")
        .alias("broadcast")
        .description("Send a message to the team")
        .arguments(ArgumentList::new([Argument::raw_text("message")])?)
        .on_run(say)
        .build()?;

    let toggle = SubCommand::builder("toggle")
        .description("Open or close the team to new members")
        .permission(TEAM_MANAGE)
        .arguments(ArgumentList::new([Argument::boolean("open").optional()])?)
        .on_run(toggle_open)
        .build()?;

    let help_sub = SubCommand::builder("help")
        .alias("?")
        .description("List team commands")
        .on_run(help)
        .build()?;

    RootCommand::builder("team")
        .aliases(["t", "squad"])
        .description("Manage your team")
        .permission(TEAM_USE)
        .subcommand(add)
        .subcommand(remove)
        .subcommand(limit)
        .subcommand(say_sub)
        .subcommand(toggle)
        .subcommand(help_sub)
        .on_run(show_roster)
        .build()
}

/// The `/online` root command.
pub fn online_command() -> Result<RootCommand, DefinitionError> {
    RootCommand::builder("online")
        .alias("who")
        .description("Look up an online player")
        .arguments(ArgumentList::new([Argument::entity("name").optional()])?)
        .on_run(online)
        .build()
}

/// Dispatchers for every demo command, sharing one entity registry.
pub fn dispatchers(
    entities: Arc<dyn EntityRegistry>,
    messages: &MessageConfig,
    team: Arc<Team>,
) -> Result<Vec<Dispatcher>, DefinitionError> {
    Ok(vec![
        Dispatcher::new(team_command()?)
            .with_entities(Arc::clone(&entities))
            .with_messages(messages.clone())
            .with_owner(team),
        Dispatcher::new(online_command()?)
            .with_entities(entities)
            .with_messages(messages.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_build() {
        let team = team_command().unwrap();
        assert!(team.answers_to("SQUAD"));
        assert_eq!(team.subcommands().len(), 6);
        assert_eq!(team.subcommand("group remove").unwrap().name(), "remove");
        assert_eq!(team.subcommand("?").unwrap().name(), "help");

        let online = online_command().unwrap();
        assert!(online.answers_to("who"));
    }

    #[test]
    fn test_team_defaults() {
        let team = Team::default();
        assert!(team.members().is_empty());
        assert_eq!(team.limit(), DEFAULT_LIMIT);
        assert!(team.is_open());
    }
}
