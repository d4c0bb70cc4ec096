//! Ctrl-C handling
//!
//! The signal only raises a flag. The walker polls `ConfirmOnInterrupt`
//! before each directory read and each line, so the prompt never runs inside
//! a signal handler and never splits a tree line.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::i18n::Language;
use crate::tree::Cancellation;

/// Shared "Ctrl-C was pressed" flag.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Return whether the flag was raised, clearing it.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Start a background listener that raises `flag` on every Ctrl-C.
pub fn install_handler(flag: InterruptFlag) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("ptree-ctrl-c".to_string())
        .spawn(move || {
            runtime.block_on(async move {
                loop {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        log::warn!("failed to listen for Ctrl-C: {}", e);
                        break;
                    }
                    flag.raise();
                }
            });
        })?;
    Ok(())
}

/// Asks the user to confirm before stopping the walk.
pub struct ConfirmOnInterrupt<R, W> {
    flag: InterruptFlag,
    language: Language,
    input: R,
    output: W,
}

impl ConfirmOnInterrupt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(flag: InterruptFlag, language: Language) -> Self {
        Self::new(flag, language, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConfirmOnInterrupt<R, W> {
    pub fn new(flag: InterruptFlag, language: Language, input: R, output: W) -> Self {
        Self {
            flag,
            language,
            input,
            output,
        }
    }

    fn confirm(&mut self) -> io::Result<bool> {
        let messages = self.language.messages();
        write!(self.output, "\n{}", messages.interrupt_prompt())?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer"));
        }

        if is_yes(&answer) {
            writeln!(self.output, "\n{}", messages.program_terminated)?;
            Ok(true)
        } else {
            writeln!(self.output, "\n{}", messages.continue_running)?;
            Ok(false)
        }
    }
}

impl<R: BufRead, W: Write> Cancellation for ConfirmOnInterrupt<R, W> {
    fn should_stop(&mut self) -> bool {
        if !self.flag.take() {
            return false;
        }
        match self.confirm() {
            Ok(stop) => stop,
            Err(e) => {
                let message = self.language.messages().interrupt_error(&e.to_string());
                let _ = writeln!(self.output, "\n{}", message);
                true
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "是")
}
