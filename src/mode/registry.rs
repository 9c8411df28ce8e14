use heapless::Vec;

use super::{ModeId, ModeSlot};
use crate::color::Rgb;
use crate::error::ConfigError;

/// Maximum number of modes in a registry
pub const MAX_MODES: usize = 16;

/// Named mode in the cycling order
#[derive(Debug, Clone)]
pub struct ModeEntry {
    name: &'static str,
    slot: ModeSlot,
}

impl ModeEntry {
    pub const fn new(name: &'static str, slot: ModeSlot) -> Self {
        Self { name, slot }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Ordered list of modes and the index of the active one
///
/// Each entry owns its animation phase, so switching modes never touches
/// the phase of the others.
#[derive(Debug, Clone)]
pub struct ModeRegistry {
    entries: Vec<ModeEntry, MAX_MODES>,
    active: usize,
}

impl ModeRegistry {
    /// Create a registry from an ordered mode list
    pub fn new(entries: &[ModeEntry]) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyModeList);
        }
        let entries = Vec::from_slice(entries).map_err(|()| ConfigError::TooManyModes)?;
        Ok(Self { entries, active: 0 })
    }

    /// Registry with every built-in mode in [`ModeId`] order
    pub fn builtin() -> Self {
        let entries = ModeId::ALL.into_iter().map(ModeId::to_entry).collect();
        Self { entries, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_name(&self) -> &'static str {
        self.entries[self.active].name
    }

    /// Index that follows `index` in the cycling order
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.entries.len()
    }

    /// Make the next mode active, wrapping after the last one
    pub fn advance(&mut self) -> usize {
        self.active = self.next_index(self.active);
        self.active
    }

    /// Render the active mode without touching its phase
    pub fn capture(&self, leds: &mut [Rgb]) {
        self.entries[self.active].slot.render(leds);
    }

    /// Render the active mode and step its animation
    pub fn render_next(&mut self, leds: &mut [Rgb]) {
        let slot = &mut self.entries[self.active].slot;
        slot.render(leds);
        slot.advance();
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
