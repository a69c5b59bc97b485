//! Command registry for REPL commands
//!
//! Provides a clean, extensible pattern for handling REPL commands.

pub mod general;
pub mod pattern;
pub mod playback;

use crate::audio::playback::{DirectionPlayer, PlaybackEvent, SoundTrigger};
use crate::audio::scheduler::Tempo;
use alankar_core::{Direction, GeneratedPattern, SeedSequence};
use crossbeam_channel::Sender;
use std::sync::Arc;

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// Not a recognized command
    NotACommand,
    /// Error occurred
    Error(String),
}

/// Everything one direction owns: its seed, its last generated pattern,
/// and its playback.
pub struct DirectionState {
    pub seed: SeedSequence,
    pub pattern: GeneratedPattern,
    pub player: DirectionPlayer,
}

impl DirectionState {
    fn new(
        direction: Direction,
        trigger: Arc<dyn SoundTrigger>,
        events: Option<Sender<PlaybackEvent>>,
    ) -> Self {
        let mut player = DirectionPlayer::new(direction, trigger);
        if let Some(tx) = events {
            player = player.with_events(tx);
        }
        DirectionState {
            seed: SeedSequence::new(direction),
            pattern: GeneratedPattern::default(),
            player,
        }
    }

    pub fn direction(&self) -> Direction {
        self.seed.direction()
    }
}

/// Context passed to command handlers
pub struct CommandContext {
    pub tempo: Tempo,
    pub trigger: Arc<dyn SoundTrigger>,
    pub ascending: DirectionState,
    pub descending: DirectionState,
}

impl CommandContext {
    pub fn new(trigger: Arc<dyn SoundTrigger>) -> Self {
        Self::build(trigger, None)
    }

    /// Create a context whose players forward highlight changes to `sender`.
    pub fn with_events(trigger: Arc<dyn SoundTrigger>, sender: Sender<PlaybackEvent>) -> Self {
        Self::build(trigger, Some(sender))
    }

    fn build(trigger: Arc<dyn SoundTrigger>, events: Option<Sender<PlaybackEvent>>) -> Self {
        CommandContext {
            tempo: Tempo::default(),
            ascending: DirectionState::new(Direction::Ascending, trigger.clone(), events.clone()),
            descending: DirectionState::new(Direction::Descending, trigger.clone(), events),
            trigger,
        }
    }

    pub fn direction(&self, direction: Direction) -> &DirectionState {
        match direction {
            Direction::Ascending => &self.ascending,
            Direction::Descending => &self.descending,
        }
    }

    pub fn direction_mut(&mut self, direction: Direction) -> &mut DirectionState {
        match direction {
            Direction::Ascending => &mut self.ascending,
            Direction::Descending => &mut self.descending,
        }
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix (e.g., "aroha add")
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        // Sort by prefix length descending for longest-match-first
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Seed and generation commands, one family per direction
    registry.register("aroha add", pattern::cmd_aroha_add);
    registry.register("aroha undo", pattern::cmd_aroha_undo);
    registry.register("aroha clear", pattern::cmd_aroha_clear);
    registry.register("aroha generate", pattern::cmd_aroha_generate);
    registry.register("aroha show", pattern::cmd_aroha_show);
    registry.register("avaroh add", pattern::cmd_avaroh_add);
    registry.register("avaroh undo", pattern::cmd_avaroh_undo);
    registry.register("avaroh clear", pattern::cmd_avaroh_clear);
    registry.register("avaroh generate", pattern::cmd_avaroh_generate);
    registry.register("avaroh show", pattern::cmd_avaroh_show);

    // Playback commands
    registry.register("aroha play", playback::cmd_aroha_play);
    registry.register("aroha stop", playback::cmd_aroha_stop);
    registry.register("avaroh play", playback::cmd_avaroh_play);
    registry.register("avaroh stop", playback::cmd_avaroh_stop);
    registry.register("stop", playback::cmd_stop_all);

    // General commands
    registry.register("tempo", general::cmd_tempo);
    registry.register("notes", general::cmd_notes);
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}
