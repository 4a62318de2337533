/// Scroll direction of the movement that produced an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// Document-space extent of one narrative step element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepBand {
    pub top: f64,
    pub bottom: f64,
}

impl StepBand {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StepEvent {
    Enter { index: usize, direction: Direction },
    Exit { index: usize, direction: Direction },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    OffsetOutOfRange(f64),
    /// Bands must be ordered top-to-bottom and must not overlap.
    BandsNotOrdered { index: usize },
    EmptyBand { index: usize },
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverError::OffsetOutOfRange(offset) => {
                write!(f, "trigger offset {offset} is outside (0, 1)")
            }
            DriverError::BandsNotOrdered { index } => {
                write!(f, "step band {index} starts above the end of the band before it")
            }
            DriverError::EmptyBand { index } => write!(f, "step band {index} has no height"),
        }
    }
}

impl std::error::Error for DriverError {}

/// Turns a scroll position stream into discrete step transitions.
///
/// A step is active while the trigger line (`scroll_y + offset *
/// viewport_height`) lies inside its band. `scroll` diffs the active step
/// against the previous one and reports the exit before the enter.
///
/// Ordering contract:
/// - Events for a given index are monotonic with scroll position but
///   re-entrant: scrolling back re-triggers enter.
/// - A jump across several bands reports only the final band, not the ones
///   skipped over.
#[derive(Debug)]
pub struct StepDriver {
    bands: Vec<StepBand>,
    offset: f64,
    viewport_h: f64,
    last_y: f64,
    active: Option<usize>,
}

impl StepDriver {
    /// Trigger offset used by the reference presentation.
    pub const DEFAULT_OFFSET: f64 = 0.33;

    pub fn new(bands: Vec<StepBand>, viewport_h: f64, offset: f64) -> Result<Self, DriverError> {
        if !(offset > 0.0 && offset < 1.0) {
            return Err(DriverError::OffsetOutOfRange(offset));
        }
        for (index, band) in bands.iter().enumerate() {
            if band.bottom <= band.top {
                return Err(DriverError::EmptyBand { index });
            }
            if index > 0 && band.top < bands[index - 1].bottom {
                return Err(DriverError::BandsNotOrdered { index });
            }
        }
        Ok(Self {
            bands,
            offset,
            viewport_h,
            last_y: 0.0,
            active: None,
        })
    }

    /// Evenly stacked bands, the common layout for a scene column.
    pub fn even_bands(count: usize, first_top: f64, step_h: f64) -> Vec<StepBand> {
        (0..count)
            .map(|i| {
                let top = first_top + i as f64 * step_h;
                StepBand::new(top, top + step_h)
            })
            .collect()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn step_count(&self) -> usize {
        self.bands.len()
    }

    /// Report the transitions caused by scrolling to `y`.
    pub fn scroll(&mut self, y: f64) -> Vec<StepEvent> {
        let direction = if y >= self.last_y {
            Direction::Down
        } else {
            Direction::Up
        };
        self.last_y = y;

        let trigger = y + self.offset * self.viewport_h;
        let now = self.bands.iter().position(|band| band.contains(trigger));
        if now == self.active {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(index) = self.active {
            events.push(StepEvent::Exit { index, direction });
        }
        if let Some(index) = now {
            events.push(StepEvent::Enter { index, direction });
        }
        self.active = now;
        events
    }
}
