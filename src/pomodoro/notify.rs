//! Audible cue played when a session switches phase.
//!
//! Cues are fire-and-forget: a failing cue is logged and otherwise ignored, and
//! never holds up the phase transition that triggered it.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::config::SoundConfig;
use crate::pomodoro::session::Phase;

/// Something that can announce a phase change.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Called exactly once each time a session switches to `phase`.
    fn phase_changed(&self, phase: Phase);
}

/// Rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn phase_changed(&self, phase: Phase) {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            warn!(%phase, error = %e, "terminal bell failed");
        }
    }
}

/// Runs an external command, e.g. a sound player, without waiting for it.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
    args: Vec<String>,
}

impl CommandNotifier {
    /// Build from an argv list. Returns `None` for an empty list.
    #[must_use]
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Notifier for CommandNotifier {
    fn phase_changed(&self, phase: Phase) {
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .env("POMO_PHASE", phase.display_name())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                debug!(program = %self.program, pid = child.id(), "cue command spawned");
                // Reap in the background so the child does not linger.
                thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!(program = %self.program, error = %e, "cue command failed to start"),
        }
    }
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn phase_changed(&self, _phase: Phase) {}
}

/// Pick the notifier described by the sound settings.
#[must_use]
pub fn from_config(sound: &SoundConfig) -> Box<dyn Notifier> {
    if !sound.enabled {
        return Box::new(SilentNotifier);
    }
    match sound.command.as_deref().and_then(CommandNotifier::from_argv) {
        Some(command) => Box::new(command),
        None => Box::new(BellNotifier),
    }
}
