use super::clock::{IntervalTicks, TickSource};
use super::food::{PointSource, RandomPoints};
use super::input::{heading_from_tilt, parse_heading, HeadingCell};
use super::state::{GameEvent, GameState};
use super::types::Bounds;
use crate::app::config::GameConfig;
use crate::protocol::ClientMessage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::{self, Sender, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Viewport {
  bounds: Bounds,
  scale: f64,
}

/// Input written by the connection reader and read by the tick loop.
#[derive(Debug)]
pub struct SessionInbound {
  heading: HeadingCell,
  viewport: StdMutex<Viewport>,
}

impl SessionInbound {
  fn new(bounds: Bounds) -> Self {
    Self {
      heading: HeadingCell::new(),
      viewport: StdMutex::new(Viewport { bounds, scale: 1.0 }),
    }
  }

  fn viewport(&self) -> Viewport {
    *self.viewport.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  fn resize(&self, bounds: Bounds, scale: Option<f64>) {
    let mut viewport = self.viewport.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    viewport.bounds = bounds;
    if let Some(scale) = scale {
      viewport.scale = scale;
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SessionCommand {
  Start,
  Tilt { gamma: f64, beta: f64 },
}

/// Connection-side handle. Dropping it ends the session.
#[derive(Debug)]
pub struct SessionHandle {
  commands: UnboundedSender<SessionCommand>,
  inbound: Arc<SessionInbound>,
  turn_step: f64,
}

impl SessionHandle {
  /// Routes one client message. Returns false once the session has stopped.
  pub fn apply(&self, message: ClientMessage) -> bool {
    match message {
      ClientMessage::Start => self.commands.send(SessionCommand::Start).is_ok(),
      ClientMessage::Tilt { gamma, beta } => self
        .commands
        .send(SessionCommand::Tilt { gamma, beta })
        .is_ok(),
      ClientMessage::Steer { action } => {
        self.inbound.heading.store(action.heading(self.turn_step));
        !self.commands.is_closed()
      }
      ClientMessage::Heading { value } => {
        match parse_heading(value) {
          Some(heading) => self.inbound.heading.store(heading),
          None => tracing::debug!(value, "ignoring non-finite heading"),
        }
        !self.commands.is_closed()
      }
      ClientMessage::Resize {
        width,
        height,
        pixel_ratio,
      } => {
        let valid = |value: f64| value.is_finite() && value > 0.0;
        if valid(width) && valid(height) && pixel_ratio.map_or(true, valid) {
          self.inbound.resize(Bounds { width, height }, pixel_ratio);
        } else {
          tracing::debug!(width, height, ?pixel_ratio, "ignoring invalid resize");
        }
        !self.commands.is_closed()
      }
    }
  }
}

/// The game loop: sole owner of the game state for one connection.
pub struct GameSession<T, P> {
  state: GameState,
  ticks: T,
  points: P,
  inbound: Arc<SessionInbound>,
  commands: UnboundedReceiver<SessionCommand>,
  events: Sender<GameEvent>,
}

pub fn spawn_session(
  config: &GameConfig,
  events: Sender<GameEvent>,
) -> (SessionHandle, JoinHandle<()>) {
  let rng = match config.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  let (handle, session) = GameSession::create(
    config,
    IntervalTicks::new(config.tick_interval),
    RandomPoints::new(rng),
    events,
  );
  (handle, tokio::spawn(session.run()))
}

impl<T, P> GameSession<T, P>
where
  T: TickSource,
  P: PointSource + Send,
{
  pub fn create(
    config: &GameConfig,
    ticks: T,
    points: P,
    events: Sender<GameEvent>,
  ) -> (SessionHandle, Self) {
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let inbound = Arc::new(SessionInbound::new(config.initial_bounds));
    let handle = SessionHandle {
      commands: commands_tx,
      inbound: Arc::clone(&inbound),
      turn_step: config.turn_step,
    };
    let session = Self {
      state: GameState::new(config.settings),
      ticks,
      points,
      inbound,
      commands: commands_rx,
      events,
    };
    (handle, session)
  }

  pub async fn run(mut self) {
    loop {
      let delivered = tokio::select! {
        biased;
        command = self.commands.recv() => {
          let Some(command) = command else { break };
          self.handle_command(command)
        }
        _ = self.ticks.next_tick(), if self.state.is_running() => self.tick(),
      };
      if !delivered {
        break;
      }
    }
    tracing::debug!("game session stopped");
  }

  fn handle_command(&mut self, command: SessionCommand) -> bool {
    match command {
      SessionCommand::Start => {
        let viewport = self.inbound.viewport();
        let events = self.state.start(
          viewport.bounds,
          viewport.scale,
          &mut self.points,
          &self.inbound.heading,
        );
        if !events.is_empty() {
          self.ticks.reset();
        }
        self.emit(events)
      }
      SessionCommand::Tilt { gamma, beta } => {
        let heading = self
          .state
          .head()
          .and_then(|head| heading_from_tilt(gamma, beta, head));
        match heading {
          Some(heading) => self.inbound.heading.store(heading),
          None => tracing::debug!(gamma, beta, "ignoring tilt"),
        }
        true
      }
    }
  }

  fn tick(&mut self) -> bool {
    let heading = self.inbound.heading.load();
    let bounds = self.inbound.viewport().bounds;
    let events = self.state.tick(heading, bounds, &mut self.points);
    if let Some(round) = self.state.round() {
      tracing::trace!(
        heading,
        score = round.score(),
        length = round.journey().len(),
        apple = ?round.apple().position(),
        "tick"
      );
    }
    self.emit(events)
  }

  /// Queues events for the socket writer. A full queue means the client has
  /// stopped reading, and the session ends rather than buffering without limit.
  fn emit(&self, events: Vec<GameEvent>) -> bool {
    for event in events {
      match self.events.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
          tracing::warn!(
            capacity = self.events.max_capacity(),
            "client is not reading events, closing session"
          );
          return false;
        }
        Err(TrySendError::Closed(_)) => return false,
      }
    }
    true
  }
}
