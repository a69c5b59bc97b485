//! Playback commands.

use crate::commands::{CommandContext, CommandResult};
use alankar_core::Direction;
use colored::*;

pub fn cmd_aroha_play(args: &str, ctx: &mut CommandContext) -> CommandResult {
    play_direction(args, ctx, Direction::Ascending)
}

pub fn cmd_avaroh_play(args: &str, ctx: &mut CommandContext) -> CommandResult {
    play_direction(args, ctx, Direction::Descending)
}

pub fn cmd_aroha_stop(args: &str, ctx: &mut CommandContext) -> CommandResult {
    stop_direction(args, ctx, Direction::Ascending)
}

pub fn cmd_avaroh_stop(args: &str, ctx: &mut CommandContext) -> CommandResult {
    stop_direction(args, ctx, Direction::Descending)
}

/// Handle bare `stop` - halt both directions.
pub fn cmd_stop_all(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    ctx.ascending.player.stop();
    ctx.descending.player.stop();
    CommandResult::Message("🔇 Playback stopped.".bright_green().to_string())
}

/// Play the direction's last generated pattern at the current tempo.
/// Any playback already running for this direction is cancelled first.
fn play_direction(_args: &str, ctx: &mut CommandContext, direction: Direction) -> CommandResult {
    let tempo = ctx.tempo;
    let state = ctx.direction_mut(direction);
    if state.pattern.is_empty() {
        return CommandResult::Error(format!(
            "No generated {} pattern — run '{} generate' first",
            direction.label(),
            match direction {
                Direction::Ascending => "aroha",
                Direction::Descending => "avaroh",
            }
        ));
    }

    state.player.play(&state.pattern, tempo);
    CommandResult::Message(
        format!(
            "▶ Playing {} ({} lines, {})",
            direction.label(),
            state.pattern.len(),
            tempo
        )
        .bright_green()
        .to_string(),
    )
}

fn stop_direction(_args: &str, ctx: &mut CommandContext, direction: Direction) -> CommandResult {
    let state = ctx.direction_mut(direction);
    if state.player.is_playing() {
        state.player.stop();
        CommandResult::Message(
            format!("🔇 {} playback stopped.", direction.label())
                .bright_green()
                .to_string(),
        )
    } else {
        CommandResult::Message(format!("{} is not playing.", direction.label()))
    }
}
