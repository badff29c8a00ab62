use anyhow::Context;
use hackatari_core::{AtariRam, Hooks};
use std::io::{BufRead, Write};

/// One line of a RAM trace
#[derive(Debug)]
pub(crate) enum Entry {
    /// RAM right after the emulator reset the game
    Reset(AtariRam),
    /// RAM of an ordinary frame
    Frame(AtariRam),
}

/// `None` for blank lines and `#` comments
pub(crate) fn parse_line(line: &str) -> anyhow::Result<Option<Entry>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let entry = match line.strip_prefix("reset") {
        Some(rest) => Entry::Reset(rest.parse()?),
        None => Entry::Frame(line.parse()?),
    };
    Ok(Some(entry))
}

/// Plays a trace through the hooks the way the emulator would call them
pub(crate) struct Replay {
    hooks: Hooks,
    only_changed: bool,
}

impl Replay {
    pub(crate) fn new(hooks: Hooks, only_changed: bool) -> Replay {
        Replay {
            hooks,
            only_changed,
        }
    }

    /// Returns the number of snapshots processed
    pub(crate) fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
    ) -> anyhow::Result<usize> {
        let mut frames = 0usize;
        let mut resets = 0usize;
        for (n, line) in input.lines().enumerate() {
            let line = line?;
            let entry = parse_line(&line).with_context(|| format!("trace line {}", n + 1))?;
            match entry {
                Some(Entry::Reset(ram)) => {
                    writeln!(out, "reset {}", resets)?;
                    let patched = self.patch(ram.clone(), true);
                    self.print(&mut out, &ram, &patched)?;
                    resets += 1;
                }
                Some(Entry::Frame(ram)) => {
                    writeln!(out, "frame {}", frames)?;
                    let patched = self.patch(ram.clone(), false);
                    self.print(&mut out, &ram, &patched)?;
                    frames += 1;
                }
                None => {}
            }
        }
        log::info!("replayed {} frames and {} resets", frames, resets);
        Ok(frames + resets)
    }

    fn patch(&mut self, mut ram: AtariRam, reset: bool) -> AtariRam {
        if reset {
            self.hooks.on_reset(&mut ram);
        } else {
            self.hooks.on_step(&mut ram);
        }
        ram
    }

    fn print<W: Write>(
        &self,
        out: &mut W,
        before: &AtariRam,
        after: &AtariRam,
    ) -> anyhow::Result<()> {
        if self.only_changed {
            for (offset, value) in before.diff(after) {
                writeln!(out, "  {:3} <- {:3}", offset, value)?;
            }
        } else {
            writeln!(out, "{}", after)?;
        }
        Ok(())
    }
}
