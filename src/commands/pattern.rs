//! Seed-entry and generation commands, one family per direction.

use crate::commands::{CommandContext, CommandResult};
use alankar_core::{engine, Direction};
use colored::*;

pub fn cmd_aroha_add(args: &str, ctx: &mut CommandContext) -> CommandResult {
    add_degrees(args, ctx, Direction::Ascending)
}

pub fn cmd_avaroh_add(args: &str, ctx: &mut CommandContext) -> CommandResult {
    add_degrees(args, ctx, Direction::Descending)
}

pub fn cmd_aroha_undo(args: &str, ctx: &mut CommandContext) -> CommandResult {
    undo_degree(args, ctx, Direction::Ascending)
}

pub fn cmd_avaroh_undo(args: &str, ctx: &mut CommandContext) -> CommandResult {
    undo_degree(args, ctx, Direction::Descending)
}

pub fn cmd_aroha_clear(args: &str, ctx: &mut CommandContext) -> CommandResult {
    clear_direction(args, ctx, Direction::Ascending)
}

pub fn cmd_avaroh_clear(args: &str, ctx: &mut CommandContext) -> CommandResult {
    clear_direction(args, ctx, Direction::Descending)
}

pub fn cmd_aroha_generate(args: &str, ctx: &mut CommandContext) -> CommandResult {
    generate_pattern(args, ctx, Direction::Ascending)
}

pub fn cmd_avaroh_generate(args: &str, ctx: &mut CommandContext) -> CommandResult {
    generate_pattern(args, ctx, Direction::Descending)
}

pub fn cmd_aroha_show(args: &str, ctx: &mut CommandContext) -> CommandResult {
    show_direction(args, ctx, Direction::Ascending)
}

pub fn cmd_avaroh_show(args: &str, ctx: &mut CommandContext) -> CommandResult {
    show_direction(args, ctx, Direction::Descending)
}

/// Append one or more degrees to a direction's seed. Each accepted degree
/// is also sounded once for immediate feedback.
fn add_degrees(args: &str, ctx: &mut CommandContext, direction: Direction) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error(format!(
            "Usage: {} add <degree> [<degree>...]",
            command_name(direction)
        ));
    }

    let trigger = ctx.trigger.clone();
    let state = ctx.direction_mut(direction);
    for symbol in args.split_whitespace() {
        if let Err(e) = state.seed.push(symbol) {
            return CommandResult::Error(e.to_string());
        }
        // Audible feedback is best-effort; selection already succeeded.
        if let Err(e) = trigger.trigger(symbol) {
            eprintln!("feedback: {}", e);
        }
    }

    CommandResult::Message(format!(
        "{} seed: {}",
        direction.label().bright_cyan(),
        state.seed
    ))
}

fn undo_degree(_args: &str, ctx: &mut CommandContext, direction: Direction) -> CommandResult {
    let state = ctx.direction_mut(direction);
    match state.seed.undo() {
        Some(symbol) => CommandResult::Message(format!(
            "Removed {} — {} seed: {}",
            symbol,
            direction.label().bright_cyan(),
            if state.seed.is_empty() {
                "(empty)".to_string()
            } else {
                state.seed.to_string()
            }
        )),
        None => CommandResult::Message(format!(
            "{} seed is already empty",
            direction.label().bright_cyan()
        )),
    }
}

/// Reset a direction: empty seed, empty pattern, playback stopped.
fn clear_direction(_args: &str, ctx: &mut CommandContext, direction: Direction) -> CommandResult {
    let state = ctx.direction_mut(direction);
    state.player.stop();
    state.seed.clear();
    state.pattern = Default::default();
    CommandResult::Message(format!("{} cleared", direction.label().bright_cyan()))
}

/// Freeze the current seed and run the transposition engine over it.
fn generate_pattern(_args: &str, ctx: &mut CommandContext, direction: Direction) -> CommandResult {
    let state = ctx.direction_mut(direction);
    if state.seed.is_empty() {
        return CommandResult::Error(format!(
            "{} seed is empty — add degrees first",
            direction.label()
        ));
    }

    state.pattern = engine::generate(&state.seed);
    CommandResult::Message(format!(
        "🎵 {} ({} lines):\n{}",
        direction.label().bright_cyan().bold(),
        state.pattern.len(),
        state.pattern
    ))
}

fn show_direction(_args: &str, ctx: &mut CommandContext, direction: Direction) -> CommandResult {
    let state = ctx.direction(direction);
    let mut out = format!(
        "{} seed: {}",
        direction.label().bright_cyan().bold(),
        if state.seed.is_empty() {
            "(empty)".to_string()
        } else {
            state.seed.to_string()
        }
    );
    if !state.pattern.is_empty() {
        let highlight = state.player.highlight().current();
        out.push('\n');
        out.push_str(&state.pattern.render(highlight.as_deref()));
    }
    CommandResult::Message(out)
}

fn command_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Ascending => "aroha",
        Direction::Descending => "avaroh",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::playback::NullTrigger;
    use std::sync::Arc;

    fn ctx() -> CommandContext {
        CommandContext::new(Arc::new(NullTrigger))
    }

    #[test]
    fn test_add_validates_membership() {
        let mut ctx = ctx();
        assert!(matches!(
            add_degrees("सा ग प", &mut ctx, Direction::Ascending),
            CommandResult::Message(_)
        ));
        assert_eq!(ctx.ascending.seed.len(), 3);

        // ध़ is descending-only; the ascending seed rejects it.
        assert!(matches!(
            add_degrees("ध़", &mut ctx, Direction::Ascending),
            CommandResult::Error(_)
        ));
        assert_eq!(ctx.ascending.seed.len(), 3);
    }

    #[test]
    fn test_undo_empty_is_harmless() {
        let mut ctx = ctx();
        assert!(matches!(
            undo_degree("", &mut ctx, Direction::Descending),
            CommandResult::Message(_)
        ));
        assert!(ctx.descending.seed.is_empty());
    }

    #[test]
    fn test_generate_stores_pattern() {
        let mut ctx = ctx();
        add_degrees("सा ग प", &mut ctx, Direction::Ascending);
        generate_pattern("", &mut ctx, Direction::Ascending);
        assert_eq!(ctx.ascending.pattern.len(), 4);
    }

    #[test]
    fn test_generate_empty_seed_is_error() {
        let mut ctx = ctx();
        assert!(matches!(
            generate_pattern("", &mut ctx, Direction::Ascending),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_clear_discards_pattern() {
        let mut ctx = ctx();
        add_degrees("सा", &mut ctx, Direction::Ascending);
        generate_pattern("", &mut ctx, Direction::Ascending);
        clear_direction("", &mut ctx, Direction::Ascending);
        assert!(ctx.ascending.seed.is_empty());
        assert!(ctx.ascending.pattern.is_empty());
    }
}
