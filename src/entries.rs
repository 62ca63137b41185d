//! Ordered registry of input slots addressed by stable ids.
use crate::commands::confirmation::{ConfirmationGate, Prompt, confirm_then};
use crate::errors::SlotError;
use crate::symbolic::utils::is_blank;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub raw_text: String,
}

impl Slot {
    pub fn new(id: SlotId, raw_text: impl Into<String>) -> Self {
        Self {
            id,
            raw_text: raw_text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.raw_text)
    }
}

/// Result of a removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// number of slots destroyed
    Removed(usize),
    Cancelled,
}

impl Removal {
    pub fn removed_any(&self) -> bool {
        matches!(self, Removal::Removed(n) if *n > 0)
    }
}

/// Ids are never reused, so a removed id stays unknown for the life of the registry.
#[derive(Debug, Default)]
pub struct SlotRegistry {
    slots: Vec<Slot>,
    next_id: u64,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, initial_text: impl Into<String>) -> SlotId {
        self.next_id += 1;
        let id = SlotId(self.next_id);
        self.slots.push(Slot::new(id, initial_text));
        debug!("added input line {} at position {}", id, self.slots.len());
        id
    }

    /// An empty slot goes at once; a slot holding text goes only if the gate confirms.
    pub fn remove_focused(
        &mut self,
        id: SlotId,
        gate: &mut dyn ConfirmationGate,
    ) -> Result<Removal, SlotError> {
        let position = self.position(id)?;
        if self.slots[position].raw_text.is_empty() {
            self.slots.remove(position);
            debug!("removed empty input line {}", id);
            return Ok(Removal::Removed(1));
        }
        let removal = confirm_then(gate, &Prompt::delete_line(), || {
            self.slots.remove(position);
            debug!("removed input line {}", id);
            1
        });
        Ok(removal.map_or(Removal::Cancelled, Removal::Removed))
    }

    /// Always asks, even when the registry is empty.
    pub fn remove_all(&mut self, gate: &mut dyn ConfirmationGate) -> Removal {
        let removal = confirm_then(gate, &Prompt::delete_all(), || {
            let n = self.slots.len();
            // front to back
            for slot in self.slots.drain(..) {
                debug!("removed input line {}", slot.id);
            }
            n
        });
        removal.map_or(Removal::Cancelled, Removal::Removed)
    }

    pub fn clear_focused_text(&mut self, id: SlotId) -> Result<(), SlotError> {
        self.set_text(id, "")
    }

    pub fn set_text(&mut self, id: SlotId, text: impl Into<String>) -> Result<(), SlotError> {
        let position = self.position(id)?;
        self.slots[position].raw_text = text.into();
        Ok(())
    }

    /// Drops every slot and creates fresh ones from `texts`, in order.
    pub fn replace_with<I, S>(&mut self, texts: I) -> Vec<SlotId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots.clear();
        texts.into_iter().map(|t| self.add(t)).collect()
    }

    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Slot at a 1-based line number.
    pub fn at_line(&self, line: usize) -> Option<&Slot> {
        line.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn ids(&self) -> Vec<SlotId> {
        self.slots.iter().map(|s| s.id).collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.raw_text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn position(&self, id: SlotId) -> Result<usize, SlotError> {
        self.slots
            .iter()
            .position(|s| s.id == id)
            .ok_or(SlotError::UnknownSlot(id))
    }
}
