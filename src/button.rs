//! Debouncing and gesture recognition over raw button readings.

use crate::input::Input;
use crate::log::info;

/// The raw reading must stay unchanged for at least this long before it is
/// accepted as the debounced reading, in milliseconds.
pub const DEBOUNCE_MS: u32 = 20;

/// A press that lasts less than the cutoff is a click, one held at least
/// this long is a long press, in milliseconds.
pub const CLICK_CUTOFF_MS: u32 = 150;

/// Maximum quiet gap after a release during which a second press may still
/// extend the sequence into a double click, in milliseconds.
pub const DOUBLE_CLICK_TIMEOUT_MS: u32 = 150;

/// Which raw reading level counts as pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    fn is_pressed(self, reading: bool) -> bool {
        match self {
            Self::ActiveHigh => reading,
            Self::ActiveLow => !reading,
        }
    }
}

/// Progress of the press and release sequence.
///
/// States ending in `Pending` record a debounced transition for which no
/// input has been delivered yet. They resolve either through a further
/// debounced edge or through dwelling past one of the timing windows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    #[default]
    Idle,
    Pressed,
    PressedPending,
    ClickedPending,
    ClickedPressedPending,
    DoubleClickedPending,
    DoubleClickedPressedPending,
}

impl State {
    /// Advances over one accepted press or release edge.
    fn on_edge(self) -> (Self, Input) {
        match self {
            Self::Idle => (Self::PressedPending, Input::None),
            Self::Pressed => (Self::Idle, Input::Release),
            Self::PressedPending => (Self::ClickedPending, Input::None),
            Self::ClickedPending => (Self::ClickedPressedPending, Input::None),
            Self::ClickedPressedPending => (Self::DoubleClickedPending, Input::None),
            Self::DoubleClickedPending => (Self::DoubleClickedPressedPending, Input::None),
            Self::DoubleClickedPressedPending => (Self::ClickedPending, Input::DoubleClick),
        }
    }

    /// Advances based on how long the debounced reading has dwelled
    /// unchanged, in milliseconds.
    ///
    /// The double click timeout is exclusive while the click cutoff is
    /// inclusive. Both comparisons decide whether a reading taken exactly at
    /// the boundary resolves on this call or the next.
    fn on_dwell(self, dwelled: u32) -> (Self, Input) {
        match self {
            Self::Idle | Self::Pressed => (self, Input::None),
            Self::PressedPending => {
                if dwelled >= CLICK_CUTOFF_MS {
                    (Self::Pressed, Input::LongPress)
                } else {
                    (self, Input::None)
                }
            }
            Self::ClickedPending => {
                if dwelled > DOUBLE_CLICK_TIMEOUT_MS {
                    (Self::Idle, Input::Click)
                } else {
                    (self, Input::None)
                }
            }
            Self::ClickedPressedPending => {
                if dwelled >= CLICK_CUTOFF_MS {
                    (Self::Pressed, Input::ClickAndLongPress)
                } else {
                    (self, Input::None)
                }
            }
            Self::DoubleClickedPending => {
                if dwelled >= CLICK_CUTOFF_MS {
                    (Self::Idle, Input::DoubleClick)
                } else {
                    (self, Input::None)
                }
            }
            Self::DoubleClickedPressedPending => {
                if dwelled >= CLICK_CUTOFF_MS {
                    (Self::Pressed, Input::DoubleClickAndLongPress)
                } else {
                    (self, Input::None)
                }
            }
        }
    }
}

/// A debounced, two-state button recognizing clicks, double clicks and
/// long presses.
///
/// Feed it raw readings through [`update`](Button::update) together with a
/// monotonic millisecond timestamp. One instance models one physical button
/// and must be driven by a single caller in non-decreasing timestamp order.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    polarity: Polarity,
    state: State,
    previous_reading: bool,
    debounced_reading: bool,
    last_reading_change: u32,
    last_change: u32,
    previous_change: u32,
}

impl Button {
    /// Creates a button with the given polarity.
    #[must_use]
    pub fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            ..Self::default()
        }
    }

    /// Adds a raw reading sampled at the given millisecond timestamp and
    /// returns the input it completed, if any.
    ///
    /// Timestamps must not decrease between calls. A single counter
    /// wraparound is tolerated by the debounce arithmetic, but gesture
    /// sequencing is only meaningful under a monotonic clock.
    pub fn update(&mut self, reading: bool, now: u32) -> Input {
        let reading = self.polarity.is_pressed(reading);

        if self.previous_reading != reading {
            // Any change in the raw reading begins a new debounce period.
            self.last_reading_change = now;
            self.previous_reading = reading;
            return Input::None;
        }

        let stable_for = now.wrapping_sub(self.last_reading_change);

        let input = if self.debounced_reading != reading {
            if stable_for < DEBOUNCE_MS {
                return Input::None;
            }

            // The new reading has outlasted the debounce period.
            let (state, input) = self.state.on_edge();
            self.state = state;
            self.debounced_reading = reading;
            self.previous_change = self.last_change;
            self.last_change = now;
            input
        } else {
            let (state, input) = self.state.on_dwell(self.duration(now));
            self.state = state;
            input
        };

        if input != Input::None {
            info!("button recognized input: {}", input);
        }

        input
    }

    /// Returns the debounced state of the button, `true` for pressed and
    /// `false` otherwise.
    #[must_use]
    pub fn state(&self) -> bool {
        self.debounced_reading
    }

    /// Returns the number of milliseconds between `now` and the last change
    /// in the debounced state, or 0 if `now` is earlier than that change.
    #[must_use]
    pub fn duration(&self, now: u32) -> u32 {
        now.saturating_sub(self.last_change)
    }

    /// Returns the number of milliseconds the button spent in its previous
    /// debounced state.
    #[must_use]
    pub fn previous_state_duration(&self) -> u32 {
        self.last_change.saturating_sub(self.previous_change)
    }

    /// Forgets the state change timestamps, as if the button has been in its
    /// current state since the beginning of time.
    pub fn reset_duration(&mut self) {
        self.last_change = 0;
        self.previous_change = 0;
    }
}
