//! Line-oriented script interpreter driving the queue engine
//!
//! The harness keeps every queue it creates on a single chain and tracks a
//! "current" queue that most commands act on. After each command that can
//! change a queue it prints the current queue as `l = [a b c]`, or
//! `l = NULL` when there is none.

use crate::app::cli::args::{Args, DEFAULT_BUFFER_SIZE};
use crate::app::harness::command::Command;
use crate::app::harness::error::{HarnessError, HarnessResult};
use crate::queue::api::{ChainId, QueueError, QueueId, QueueStore};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Largest repeat count accepted by `ih`/`it`
pub const MAX_REPEAT: usize = 1 << 20;

/// Settings that change how commands behave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessSettings {
    /// Sort and merge in descending order
    pub descend: bool,
    /// Bytes available for each removed value, terminator included
    pub buffer_size: usize,
    /// Echo each command before running it
    pub echo: bool,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            descend: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
            echo: false,
        }
    }
}

impl From<&Args> for HarnessSettings {
    fn from(args: &Args) -> Self {
        Self {
            descend: args.descend,
            buffer_size: args.buffer_size(),
            echo: args.echo,
        }
    }
}

/// Whether the script should keep going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Script interpreter writing its report to `W`
pub struct Harness<W: Write> {
    store: QueueStore,
    chain: ChainId,
    current: Option<QueueId>,
    settings: HarnessSettings,
    out: W,
    failures: usize,
}

impl<W: Write> Harness<W> {
    pub fn new(settings: HarnessSettings, out: W) -> HarnessResult<Self> {
        let mut store = QueueStore::new();
        let chain = store.create_chain()?;
        Ok(Self {
            store,
            chain,
            current: None,
            settings,
            out,
            failures: 0,
        })
    }

    pub fn store(&self) -> &QueueStore {
        &self.store
    }

    pub fn current(&self) -> Option<QueueId> {
        self.current
    }

    /// Number of queues the harness currently holds
    pub fn queue_count(&self) -> usize {
        self.store.chain_len(self.chain)
    }

    /// Number of script lines that failed so far
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every line of `input` until it ends or a `quit` command
    ///
    /// Failing lines are reported and counted without stopping the script;
    /// only I/O errors abort. Returns the number of failed lines.
    pub fn run_script<R: BufRead>(&mut self, input: R) -> HarnessResult<usize> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(HarnessError::Io(e)) => return Err(HarnessError::Io(e)),
                Err(e) => {
                    self.failures += 1;
                    log::warn!("line {}: {}", number + 1, e);
                    writeln!(self.out, "ERROR: {}", e)?;
                }
            }
        }
        Ok(self.failures)
    }

    /// Run a single script line; blank lines and `#` comments are skipped
    pub fn execute_line(&mut self, line: &str) -> HarnessResult<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }
        if self.settings.echo {
            writeln!(self.out, "cmd> {}", trimmed)?;
        }

        let mut words = trimmed.split_whitespace();
        let name = words.next().unwrap_or_default();
        let command = Command::from_str(name).map_err(|_| HarnessError::UnknownCommand {
            name: name.to_string(),
        })?;
        let args: Vec<&str> = words.collect();
        log::debug!("executing {} {:?}", command, args);
        self.execute(command, &args)
    }

    fn execute(&mut self, command: Command, args: &[&str]) -> HarnessResult<Flow> {
        match command {
            Command::New => {
                let queue = self.store.create()?;
                if let Err(e) = self.store.chain_attach(self.chain, queue) {
                    self.store.destroy(queue);
                    return Err(e.into());
                }
                self.current = Some(queue);
            }
            Command::Free => {
                let queue = self.require_queue(command)?;
                self.store.chain_detach(self.chain, queue);
                self.store.destroy(queue);
                self.current = self.store.chain_queues(self.chain).first().copied();
            }
            Command::InsertHead | Command::InsertTail => {
                let queue = self.require_queue(command)?;
                let value = args.first().ok_or(HarnessError::MissingArgument {
                    command,
                    argument: "str",
                })?;
                let count = parse_count(command, args.get(1))?.unwrap_or(1);
                if count > MAX_REPEAT {
                    return Err(HarnessError::InvalidArgument {
                        command,
                        value: count.to_string(),
                    });
                }
                for _ in 0..count {
                    if command == Command::InsertHead {
                        self.store.insert_front(queue, value)?;
                    } else {
                        self.store.insert_back(queue, value)?;
                    }
                }
            }
            Command::RemoveHead | Command::RemoveTail => {
                let queue = self.require_queue(command)?;
                let mut buf = removal_buffer(self.settings.buffer_size)?;
                let removed = if command == Command::RemoveHead {
                    self.store.remove_front(queue, Some(buf.as_mut_slice()))
                } else {
                    self.store.remove_back(queue, Some(buf.as_mut_slice()))
                };
                let element = removed.ok_or(HarnessError::EmptyQueue { command })?;
                element.release();

                let removed = buffer_text(&buf);
                writeln!(self.out, "Removed {} from queue", removed)?;
                if let Some(expected) = args.first() {
                    if *expected != removed {
                        self.show()?;
                        return Err(HarnessError::Mismatch {
                            expected: expected.to_string(),
                            actual: removed,
                        });
                    }
                }
            }
            Command::Size => {
                let queue = self.require_queue(command)?;
                writeln!(self.out, "Queue size = {}", self.store.size(queue))?;
                return Ok(Flow::Continue);
            }
            Command::DeleteMiddle => {
                let queue = self.require_queue(command)?;
                if !self.store.delete_middle(queue) {
                    return Err(HarnessError::EmptyQueue { command });
                }
            }
            Command::Dedup => {
                let queue = self.require_queue(command)?;
                self.store.delete_adjacent_duplicates(queue);
            }
            Command::Swap => {
                let queue = self.require_queue(command)?;
                self.store.swap_pairs(queue);
            }
            Command::Reverse => {
                let queue = self.require_queue(command)?;
                self.store.reverse(queue);
            }
            Command::ReverseK => {
                let queue = self.require_queue(command)?;
                let k = parse_count(command, args.first())?.ok_or(
                    HarnessError::MissingArgument {
                        command,
                        argument: "k",
                    },
                )?;
                self.store.reverse_k_group(queue, k);
            }
            Command::Sort => {
                let queue = self.require_queue(command)?;
                self.store.sort(queue, self.settings.descend);
            }
            Command::Ascend => {
                let queue = self.require_queue(command)?;
                self.store.filter_ascending(queue);
            }
            Command::Descend => {
                let queue = self.require_queue(command)?;
                self.store.filter_descending(queue);
            }
            Command::Merge => {
                self.require_queue(command)?;
                let total = self.store.merge_all(self.chain, self.settings.descend);
                self.release_merged_sources();
                writeln!(self.out, "Merged into {} elements", total)?;
            }
            Command::Show => {}
            Command::Prev | Command::Next => {
                let queues = self.store.chain_queues(self.chain);
                if queues.is_empty() {
                    return Err(HarnessError::NoQueue { command });
                }
                let len = queues.len();
                let position = self
                    .current
                    .and_then(|current| queues.iter().position(|&q| q == current));
                let target = match (position, command) {
                    (None, _) => 0,
                    (Some(pos), Command::Next) => (pos + 1) % len,
                    (Some(pos), _) => (pos + len - 1) % len,
                };
                self.current = Some(queues[target]);
            }
            Command::Help => {
                for command in Command::iter() {
                    writeln!(self.out, "  {:<12} | {}", command.usage(), command.description())?;
                }
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        self.show()?;
        Ok(Flow::Continue)
    }

    /// Destroy the emptied merge sources, keeping the destination current
    fn release_merged_sources(&mut self) {
        let mut destination = None;
        for queue in self.store.chain_queues(self.chain) {
            if destination.is_none() && self.store.is_valid(queue) {
                destination = Some(queue);
                continue;
            }
            self.store.chain_detach(self.chain, queue);
            self.store.destroy(queue);
        }
        self.current = destination;
    }

    fn require_queue(&self, command: Command) -> HarnessResult<QueueId> {
        self.current
            .filter(|&queue| self.store.is_valid(queue))
            .ok_or(HarnessError::NoQueue { command })
    }

    fn show(&mut self) -> HarnessResult<()> {
        match self.current {
            Some(queue) if self.store.is_valid(queue) => {
                let values: Vec<&str> = self.store.iter(queue).collect();
                writeln!(self.out, "l = [{}]", values.join(" "))?;
            }
            _ => writeln!(self.out, "l = NULL")?,
        }
        Ok(())
    }
}

/// Parse an optional positive count argument
fn parse_count(command: Command, arg: Option<&&str>) -> HarnessResult<Option<usize>> {
    arg.map(|value| {
        value
            .parse::<usize>()
            .map_err(|_| HarnessError::InvalidArgument {
                command,
                value: value.to_string(),
            })
    })
    .transpose()
}

/// Zeroed buffer for a removed value, failing instead of aborting when the
/// configured size cannot be allocated
fn removal_buffer(size: usize) -> HarnessResult<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size).map_err(|_| {
        log::debug!("failed to allocate {} byte removal buffer", size);
        QueueError::AllocationFailed { bytes: size }
    })?;
    buf.resize(size, 0);
    Ok(buf)
}

/// Text of a NUL-terminated removal buffer
fn buffer_text(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
