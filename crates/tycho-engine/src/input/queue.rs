use glam::Vec2;

/// Discrete events the simulation understands.
/// Each one maps to exactly one controller transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    TogglePause,
    /// Cycle the focus filter: All, each secondary in order, back to All.
    FocusNext,
    ToggleTrails,
    ToggleLabels,
    /// Epicycle guide circles.
    ToggleGuides,
    ToggleHud,
    SpeedDown,
    SpeedUp,
    ZoomIn,
    ZoomOut,
    /// Back to unit zoom and no pan.
    ResetView,
    /// The drawing surface changed size (screen units).
    Resize { width: f32, height: f32 },
    Quit,
}

/// A held panning direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which pan directions are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PanState {
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Combined pan vector for one tick, in screen units.
    ///
    /// Holding LEFT slides the scene right and UP slides it down, so the view
    /// moves the way the arrow points. Opposite keys cancel.
    pub fn vector(&self, step: f32) -> Vec2 {
        let axis = |pos: bool, neg: bool| pos as i8 as f32 - neg as i8 as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down)) * step
    }
}

/// A queue of input.
/// The host writes events and held-key state; the simulation drains the
/// events and samples the held state once per tick.
pub struct InputQueue {
    events: Vec<SimEvent>,
    pan: PanState,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
            pan: PanState::default(),
        }
    }

    /// Push a new discrete event.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order and clear the queue.
    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Mark a direction as held or released.
    pub fn set_held(&mut self, direction: Direction, held: bool) {
        self.pan.set(direction, held);
    }

    /// Release every held direction (the page lost focus, for example).
    pub fn release_all(&mut self) {
        self.pan = PanState::default();
    }

    pub fn pan_state(&self) -> PanState {
        self.pan
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
