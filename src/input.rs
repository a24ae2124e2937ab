use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use tracing::{debug, info};

/// Where interactive answers come from, one line per call. `None` means the
/// user stopped entering input.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

#[derive(Debug)]
pub enum InputEvent {
    Line(String),
    Closed,
    Interrupted,
    Failed(io::Error),
}

/// Lines and Ctrl-C signals merged into one channel, so an interrupt ends
/// the pending prompt instead of the process.
pub struct ChannelInput {
    events: Receiver<InputEvent>,
    closed: bool,
}

impl ChannelInput {
    pub fn new(events: Receiver<InputEvent>) -> Self {
        Self {
            events,
            closed: false,
        }
    }

    /// Reads stdin on a helper thread and routes Ctrl-C into the same channel.
    pub fn stdin() -> Result<Self, ctrlc::Error> {
        let (tx, rx) = mpsc::channel();

        let interrupts = tx.clone();
        ctrlc::set_handler(move || {
            info!("interrupt received");
            let _ = interrupts.send(InputEvent::Interrupted);
        })?;

        thread::spawn(move || read_lines(io::stdin().lock(), tx));
        Ok(Self::new(rx))
    }
}

fn read_lines<R: BufRead>(mut reader: R, tx: Sender<InputEvent>) {
    loop {
        let event = match reader.next_line() {
            Ok(Some(line)) => InputEvent::Line(line),
            Ok(None) => InputEvent::Closed,
            Err(err) => InputEvent::Failed(err),
        };
        let last = !matches!(event, InputEvent::Line(_));
        if tx.send(event).is_err() || last {
            break;
        }
    }
    debug!("stdin reader stopped");
}

impl LineSource for ChannelInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        match self.events.recv() {
            Ok(InputEvent::Line(line)) => Ok(Some(line)),
            Ok(InputEvent::Interrupted) => Ok(None),
            Ok(InputEvent::Failed(err)) => {
                self.closed = true;
                Err(err)
            }
            Ok(InputEvent::Closed) | Err(_) => {
                self.closed = true;
                Ok(None)
            }
        }
    }
}
