#![forbid(unsafe_code)]

//! Elm-style runtime for the portfolio.
//!
//! The program runtime manages the update/view loop: it polls terminal
//! input, converts it to messages, runs [`Model::update`], executes the
//! returned [`Cmd`], and redraws when something changed. Rendering goes
//! through ratatui on the alternate screen.
//!
//! # Example
//!
//! ```ignore
//! use folio_runtime::{Cmd, Model};
//! use folio_core::event::Event;
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//!     Ignore,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Key(k) if k.is_char('q') => Msg::Quit,
//!             Event::Key(k) if k.is_char('+') => Msg::Increment,
//!             _ => Msg::Ignore,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Increment => { self.count += 1; Cmd::none() }
//!             Msg::Quit => Cmd::quit(),
//!             Msg::Ignore => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self, area: Rect, buf: &mut Buffer) {
//!         buf.set_string(area.x, area.y, self.count.to_string(), Default::default());
//!     }
//! }
//! ```

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossterm::event::{self as ct_event, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use folio_core::event::Event;
use ratatui::DefaultTerminal;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tracing::{debug, debug_span, info, info_span, warn};

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Must be convertible from terminal events.
    type Message: From<Event> + Send + 'static;

    /// Called once when the program starts, before the first measurement.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state into `buf` within `area`.
    ///
    /// Takes `&self`: any bookkeeping the view needs to leave behind (hit
    /// regions, measured sizes) goes through interior mutability.
    fn view(&self, area: Rect, buf: &mut Buffer);
}

/// Commands represent side effects to be executed by the runtime.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Quit the application.
    Quit,
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Send a message to the model.
    Msg(M),
    /// Deliver one [`Event::Tick`] after a duration.
    ///
    /// One-shot: a model that animates requests the next tick from its tick
    /// handler. A newer request replaces a pending one.
    Tick(Duration),
    /// Emit a line to the application log.
    ///
    /// The terminal belongs to the UI, so this goes to `tracing`, not stdout.
    Log(String),
    /// Execute a blocking operation on a background thread. The return value
    /// is sent back as a message to the model.
    Task(Box<dyn FnOnce() -> M + Send>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Tick(d) => f.debug_tuple("Tick").field(d).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
            Self::Task(_) => write!(f, "Task"),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a tick command.
    #[inline]
    pub fn tick(duration: Duration) -> Self {
        Self::Tick(duration)
    }

    /// Create a batch of commands, collapsing trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }

    /// Create a background task command.
    pub fn task<F>(f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self::Task(Box::new(f))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Return a stable name for tracing.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Quit => "Quit",
            Self::Batch(_) => "Batch",
            Self::Msg(_) => "Msg",
            Self::Tick(_) => "Tick",
            Self::Log(_) => "Log",
            Self::Task(_) => "Task",
        }
    }
}

// ---------------------------------------------------------------------------
// Program
// ---------------------------------------------------------------------------

/// Runtime options.
#[derive(Debug, Clone, Copy)]
pub struct ProgramConfig {
    /// Capture mouse clicks and wheel events.
    pub mouse: bool,
    /// Upper bound on how long the loop waits for input when no tick is due.
    pub poll_timeout: Duration,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            poll_timeout: Duration::from_millis(250),
        }
    }
}

impl ProgramConfig {
    #[must_use]
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }
}

/// Drives a [`Model`] against the real terminal.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
    running: bool,
    dirty: bool,
    next_tick: Option<Instant>,
    task_sender: mpsc::Sender<M::Message>,
    task_receiver: mpsc::Receiver<M::Message>,
    task_handles: Vec<JoinHandle<()>>,
    frame_idx: u64,
}

impl<M: Model> Program<M> {
    pub fn new(model: M, config: ProgramConfig) -> Self {
        let (task_sender, task_receiver) = mpsc::channel();
        Self {
            model,
            config,
            running: true,
            dirty: true,
            next_tick: None,
            task_sender,
            task_receiver,
            task_handles: Vec::new(),
            frame_idx: 0,
        }
    }

    /// Take over the terminal, run until the model quits, restore the
    /// terminal, and hand the model back.
    pub fn run(mut self) -> io::Result<M> {
        let mut terminal = ratatui::try_init()?;
        let result = if self.config.mouse {
            execute!(io::stdout(), EnableMouseCapture)
        } else {
            Ok(())
        }
        .and_then(|()| {
            info!(mouse = self.config.mouse, "program started");
            self.run_event_loop(&mut terminal)
        });

        if self.config.mouse
            && let Err(e) = execute!(io::stdout(), DisableMouseCapture)
        {
            warn!(error = %e, "failed to disable mouse capture");
        }
        ratatui::try_restore()?;
        info!(frames = self.frame_idx, "program stopped");
        result.map(|()| self.model)
    }

    fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        let cmd = {
            let _span = info_span!("folio.program.init").entered();
            self.model.init()
        };
        self.execute_cmd(cmd)?;

        // Measure on mount.
        let size = terminal.size()?;
        self.handle_event(Event::Resize {
            width: size.width,
            height: size.height,
        })?;

        while self.running {
            if self.dirty {
                self.render_frame(terminal)?;
            }

            let timeout = self.effective_timeout();
            if ct_event::poll(timeout)? {
                // Drain all pending events
                loop {
                    if let Some(event) = Event::from_crossterm(ct_event::read()?) {
                        self.handle_event(event)?;
                    }
                    if !self.running || !ct_event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            self.process_task_results()?;
            self.reap_finished_tasks();

            if self.running && self.should_tick() {
                self.handle_event(Event::Tick)?;
            }
        }

        self.reap_finished_tasks();
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        if let Event::Resize { width, height } = event {
            debug!(width, height, "terminal resized");
        }
        let msg = M::Message::from(event);
        let cmd = {
            let _span = debug_span!("folio.program.update").entered();
            self.model.update(msg)
        };
        self.dirty = true;
        self.execute_cmd(cmd)
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) -> io::Result<()> {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.dirty = true;
                self.execute_cmd(cmd)?;
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c)?;
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Tick(duration) => {
                self.next_tick = Some(Instant::now() + duration);
            }
            Cmd::Log(text) => {
                info!(target: "folio::log", "{}", text.trim_end());
            }
            Cmd::Task(f) => {
                let sender = self.task_sender.clone();
                let handle = std::thread::spawn(move || {
                    let msg = f();
                    let _ = sender.send(msg);
                });
                self.task_handles.push(handle);
            }
        }
        Ok(())
    }

    fn process_task_results(&mut self) -> io::Result<()> {
        while let Ok(msg) = self.task_receiver.try_recv() {
            let cmd = self.model.update(msg);
            self.dirty = true;
            self.execute_cmd(cmd)?;
            if !self.running {
                break;
            }
        }
        Ok(())
    }

    fn reap_finished_tasks(&mut self) {
        if self.task_handles.is_empty() {
            return;
        }

        let mut remaining = Vec::with_capacity(self.task_handles.len());
        for handle in self.task_handles.drain(..) {
            if handle.is_finished() {
                if let Err(payload) = handle.join() {
                    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                        (*s).to_owned()
                    } else if let Some(s) = payload.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "unknown panic payload".to_owned()
                    };
                    tracing::error!("spawned task panicked: {msg}");
                }
            } else {
                remaining.push(handle);
            }
        }
        self.task_handles = remaining;
    }

    fn render_frame(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        self.frame_idx = self.frame_idx.wrapping_add(1);
        let _span = debug_span!("folio.program.view", frame = self.frame_idx).entered();
        terminal.draw(|frame| {
            let area = frame.area();
            self.model.view(area, frame.buffer_mut());
        })?;
        self.dirty = false;
        Ok(())
    }

    /// Wait no longer than the next due tick.
    fn effective_timeout(&self) -> Duration {
        match self.next_tick {
            Some(at) => at
                .saturating_duration_since(Instant::now())
                .min(self.config.poll_timeout),
            None => self.config.poll_timeout,
        }
    }

    fn should_tick(&mut self) -> bool {
        if let Some(at) = self.next_tick
            && Instant::now() >= at
        {
            self.next_tick = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Msg {
        A,
        B,
    }

    impl From<Event> for Msg {
        fn from(_: Event) -> Self {
            Msg::A
        }
    }

    #[test]
    fn batch_collapses_trivial_cases() {
        assert!(Cmd::<Msg>::batch(vec![]).is_none());
        assert!(Cmd::<Msg>::batch(vec![Cmd::none(), Cmd::none()]).is_none());
        assert!(matches!(
            Cmd::batch(vec![Cmd::none(), Cmd::msg(Msg::B)]),
            Cmd::Msg(Msg::B)
        ));
        assert!(matches!(
            Cmd::<Msg>::batch(vec![Cmd::quit(), Cmd::log("x")]),
            Cmd::Batch(v) if v.len() == 2
        ));
    }

    #[test]
    fn type_names() {
        assert_eq!(Cmd::<Msg>::tick(Duration::from_millis(1)).type_name(), "Tick");
        assert_eq!(Cmd::task(|| Msg::A).type_name(), "Task");
    }

    #[test]
    fn debug_hides_task_closure() {
        let cmd = Cmd::task(|| Msg::A);
        assert_eq!(format!("{cmd:?}"), "Task");
        assert_eq!(format!("{:?}", Cmd::msg(Msg::B)), "Msg(B)");
    }

    #[test]
    fn default_config_captures_mouse() {
        let config = ProgramConfig::default();
        assert!(config.mouse);
        assert!(!config.with_mouse(false).mouse);
    }
}
