//! General REPL commands (help, quit, tempo, notes)

use crate::audio::scheduler::{MAX_BPM, MIN_BPM};
use crate::commands::{CommandContext, CommandResult};
use alankar_core::Direction;
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `tempo [bpm]` command. A bad value leaves the tempo unchanged.
pub fn cmd_tempo(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Current tempo: {}", ctx.tempo));
    }

    match args.parse::<u32>() {
        Ok(bpm) => match ctx.tempo.set(bpm) {
            Ok(()) => CommandResult::Message(
                format!("🎵 Tempo set to {}", ctx.tempo)
                    .bright_green()
                    .to_string(),
            ),
            Err(e) => CommandResult::Error(e.to_string()),
        },
        Err(_) => CommandResult::Error(format!(
            "Invalid tempo. Use a whole number between {}-{} BPM",
            MIN_BPM, MAX_BPM
        )),
    }
}

/// Handle `notes` - list the selectable degrees of both alphabets.
pub fn cmd_notes(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let mut out = String::new();
    for direction in [Direction::Ascending, Direction::Descending] {
        let symbols: Vec<&str> = direction.alphabet().symbols().collect();
        out.push_str(&format!(
            "{}: {}\n",
            direction.label().bright_cyan().bold(),
            symbols.join(" ")
        ));
    }
    CommandResult::Message(out.trim_end().to_string())
}

/// Print help information
fn print_help() {
    println!("{}", "🎵 Alankar Generator Help".bold());
    println!("{}", "=========================".bold());
    println!();
    println!("{}", "Seed entry (per direction: aroha / avaroh):".green());
    println!(
        "  {}   - Append degrees to the seed",
        "aroha add सा ग प".cyan()
    );
    println!("  {}         - Remove the last degree", "aroha undo".cyan());
    println!(
        "  {}        - Reset seed and pattern",
        "aroha clear".cyan()
    );
    println!();
    println!("{}", "Generation and playback:".green());
    println!(
        "  {}     - Expand the seed into its transpositions",
        "aroha generate".cyan()
    );
    println!(
        "  {}         - Play the generated pattern",
        "aroha play".cyan()
    );
    println!("  {}         - Stop that direction", "aroha stop".cyan());
    println!("  {}               - Stop both directions", "stop".cyan());
    println!(
        "  {}         - Show seed and pattern (marks the sounding degree)",
        "aroha show".cyan()
    );
    println!();
    println!("{}", "Settings:".green());
    println!("  {}              - Show current tempo", "tempo".cyan());
    println!(
        "  {}          - Set tempo ({}-{} BPM)",
        "tempo <bpm>".cyan(),
        MIN_BPM,
        MAX_BPM
    );
    println!("  {}              - List selectable degrees", "notes".cyan());
    println!();
    println!("{}", "Other Commands:".green());
    println!("  {}              - Show this help", "help".bright_green());
    println!("  {}              - Exit", "quit".bright_red());
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
    fn test_tempo_show_and_set() {
        let mut ctx = ctx();
        assert!(matches!(cmd_tempo("", &mut ctx), CommandResult::Message(_)));
        assert!(matches!(
            cmd_tempo("120", &mut ctx),
            CommandResult::Message(_)
        ));
        assert_eq!(ctx.tempo.bpm(), 120);
    }

    #[test]
    fn test_bad_tempo_keeps_previous() {
        let mut ctx = ctx();
        cmd_tempo("120", &mut ctx);

        assert!(matches!(
            cmd_tempo("abc", &mut ctx),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            cmd_tempo("500", &mut ctx),
            CommandResult::Error(_)
        ));
        assert!(matches!(cmd_tempo("12", &mut ctx), CommandResult::Error(_)));
        assert_eq!(ctx.tempo.bpm(), 120);
    }

    #[test]
    fn test_notes_lists_both_alphabets() {
        let mut ctx = ctx();
        match cmd_notes("", &mut ctx) {
            CommandResult::Message(msg) => {
                assert!(msg.contains("सा"));
                assert!(msg.contains("ध़"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
