//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use teamup::{
    cli::{Commands, GroupCmd, PlayerCmd, Teamup},
    commands::{
        common::CommandContext,
        groups::{handle_group_create, handle_list_groups, handle_remove_group},
        players::{
            handle_add_player, handle_list_players, handle_remove_player, AddPlayerParams,
            ListPlayersParams,
        },
    },
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Teamup::parse();

    match app.command {
        Commands::Group { cmd } => match cmd {
            GroupCmd::Create { name, storage } => {
                let mut ctx = CommandContext::new(storage.db.as_deref())?;
                handle_group_create(&mut ctx.storage, &name)?;
            }

            GroupCmd::List { json, storage } => {
                let ctx = CommandContext::new(storage.db.as_deref())?;
                handle_list_groups(&ctx.storage, json)?;
            }

            GroupCmd::Remove { name, yes, storage } => {
                let mut ctx = CommandContext::new(storage.db.as_deref())?;
                handle_remove_group(&mut ctx.storage, &name, yes)?;
            }
        },

        Commands::Player { cmd } => match cmd {
            PlayerCmd::Add {
                name,
                group,
                team,
                storage,
            } => {
                let mut ctx = CommandContext::new(storage.db.as_deref())?;
                handle_add_player(&mut ctx.storage, AddPlayerParams { name, group, team })?;
            }

            PlayerCmd::List {
                group,
                team,
                json,
                storage,
            } => {
                let ctx = CommandContext::new(storage.db.as_deref())?;
                handle_list_players(
                    &ctx.storage,
                    ListPlayersParams {
                        group,
                        team,
                        as_json: json,
                    },
                )?;
            }

            PlayerCmd::Remove {
                name,
                group,
                storage,
            } => {
                let mut ctx = CommandContext::new(storage.db.as_deref())?;
                handle_remove_player(&mut ctx.storage, &name, &group)?;
            }
        },
    }

    Ok(())
}
