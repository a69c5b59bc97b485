//! Interactive REPL for building and playing alankars.

use crate::audio::audio::SargamSynth;
use crate::audio::playback::{NullTrigger, PlaybackEvent, SoundTrigger};
use crate::commands::{create_registry, CommandContext, CommandResult};
use anyhow::Result;
use colored::*;
use crossbeam_channel::{unbounded, Receiver, Sender};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};
use std::sync::Arc;
use std::thread;

/// Types of events the REPL loop handles
enum ReplEvent {
    Input(Result<String, ReadlineError>),
}

/// Interactive REPL for the alankar generator
pub struct Repl {
    editor: Option<DefaultEditor>,
    trigger: Arc<dyn SoundTrigger>,

    // Event channels
    tx_input: Sender<ReplEvent>,
    rx_input: Receiver<ReplEvent>,
    tx_events: Sender<PlaybackEvent>,
    rx_events: Receiver<PlaybackEvent>,
}

impl Repl {
    /// Create a new REPL instance. A missing audio device downgrades to
    /// silent playback rather than failing.
    pub fn new() -> RustylineResult<Self> {
        let editor = DefaultEditor::new()?;

        let trigger: Arc<dyn SoundTrigger> = match SargamSynth::new() {
            Ok(synth) => Arc::new(synth),
            Err(e) => {
                eprintln!(
                    "{} no audio output ({}); continuing silently",
                    "Warning:".bright_yellow(),
                    e
                );
                Arc::new(NullTrigger)
            }
        };

        let (tx_input, rx_input) = unbounded();
        let (tx_events, rx_events) = unbounded();

        Ok(Repl {
            editor: Some(editor),
            trigger,
            tx_input,
            rx_input,
            tx_events,
            rx_events,
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🎵".bright_yellow(),
            "Alankar Generator".bright_cyan().bold()
        );
        println!(
            "Build a seed with {}, then {} and {}.",
            "aroha add सा ग प".cyan(),
            "aroha generate".cyan(),
            "aroha play".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        // Move editor to thread
        let mut editor = self.editor.take().expect("Repl editor missing");
        let tx_input = self.tx_input.clone();

        thread::spawn(move || loop {
            let prompt = format!("{} ", "alankar>".bright_magenta().bold());
            let readline = editor.readline(&prompt);

            match readline {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if !line.is_empty() {
                        let _ = editor.add_history_entry(&line);
                    }
                    if tx_input.send(ReplEvent::Input(Ok(line))).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let _ = tx_input.send(ReplEvent::Input(Err(err)));
                    break;
                }
            }
        });

        // Create command registry and context
        let registry = create_registry();
        let mut ctx = CommandContext::with_events(self.trigger.clone(), self.tx_events.clone());

        loop {
            crossbeam_channel::select! {
                recv(self.rx_input) -> msg => match msg {
                    Ok(ReplEvent::Input(res)) => {
                        match res {
                            Ok(line) => {
                                if line.is_empty() {
                                    continue;
                                }

                                match registry.execute(&line, &mut ctx) {
                                    CommandResult::Success => {
                                        // Command executed, no output needed
                                    }
                                    CommandResult::Message(msg) => {
                                        println!("{}", msg);
                                    }
                                    CommandResult::Exit => {
                                        println!("{} 🎵", "Goodbye!".bright_cyan());
                                        break;
                                    }
                                    CommandResult::Error(e) => {
                                        println!("{} {}", "Error:".bright_red().bold(), e.red());
                                    }
                                    CommandResult::NotACommand => {
                                        println!(
                                            "{} unknown command '{}' — type '{}' for a list",
                                            "Error:".bright_red().bold(),
                                            line,
                                            "help".bright_green()
                                        );
                                    }
                                }
                            }
                            Err(ReadlineError::Interrupted) => {
                                println!("{} 🎵", "Goodbye!".bright_cyan());
                                break;
                            }
                            Err(ReadlineError::Eof) => {
                                println!("{} 🎵", "Goodbye!".bright_cyan());
                                break;
                            }
                            Err(err) => {
                                println!(
                                    "{} {}",
                                    "Error reading input:".bright_red().bold(),
                                    err.to_string().red()
                                );
                            }
                        }
                    },
                    Err(_) => break, // Channel closed
                },

                recv(self.rx_events) -> msg => match msg {
                    Ok(event) => {
                        // Live view of the currently sounding degree.
                        if let Some(symbol) = event.symbol {
                            println!(
                                "  {} {} {}",
                                "♪".bright_yellow(),
                                event.direction.label().bright_cyan(),
                                symbol.bold()
                            );
                        }
                    },
                    Err(_) => break, // Channel closed
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start() -> Result<()> {
    let mut repl = Repl::new().map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}
