//! The ask / reject / accept state machine behind the two buttons.
//!
//! `Asking -> Accepted` happens once, on the first confirm, and never reverses.
//! Reject events only mean something while asking; each one advances the
//! label, jumps the negative control somewhere new and grows the positive one.

use crate::config::DeviceClass;
use crate::constants::{CONFETTI_COLORS, REJECT_BOUNDS_Y_RATIO, YES_GROWTH_BASE, YES_GROWTH_MAX};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Asking,
    Accepted,
}

/// What the pointer did to the negative control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectTrigger {
    Hover,
    Click,
}

impl RejectTrigger {
    /// Hover only counts where there is a hovering pointer, i.e. wide viewports.
    #[inline]
    pub fn honoured_on(self, device: DeviceClass) -> bool {
        match self {
            RejectTrigger::Click => true,
            RejectTrigger::Hover => !device.is_narrow(),
        }
    }
}

/// One-shot celebratory burst requested by the accept transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Celebration {
    pub particle_count: usize,
    pub colors: &'static [u32],
}

/// Visible state after a processed reject.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RejectOutcome {
    pub rejection_index: usize,
    pub yes_growth: f32,
    pub no_offset: Vec2,
}

pub struct InteractionState {
    phase: Phase,
    rejection_index: usize,
    yes_growth: f32,
    no_offset: Vec2,
    messages: Vec<String>,
    rng: StdRng,
}

impl InteractionState {
    /// `messages[0]` is the resting label; callers guarantee the list is non-empty.
    pub fn new(messages: Vec<String>, rng: StdRng) -> Self {
        Self {
            phase: Phase::Asking,
            rejection_index: 0,
            yes_growth: YES_GROWTH_BASE,
            no_offset: Vec2::ZERO,
            messages,
            rng,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn rejection_index(&self) -> usize {
        self.rejection_index
    }

    #[inline]
    pub fn yes_growth(&self) -> f32 {
        self.yes_growth
    }

    /// Offset of the negative control from its resting place, in CSS pixels.
    #[inline]
    pub fn no_offset(&self) -> Vec2 {
        self.no_offset
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Current label of the negative control.
    pub fn label(&self) -> &str {
        self.messages
            .get(self.rejection_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Handle a reject. Returns `None` when the event is ignored: after
    /// acceptance, or a hover on a device without hover.
    pub fn reject(&mut self, trigger: RejectTrigger, device: DeviceClass) -> Option<RejectOutcome> {
        if self.phase == Phase::Accepted || !trigger.honoured_on(device) {
            return None;
        }
        let bounds = device.reject_bounds();
        let rx = (self.rng.gen::<f32>() - 0.5) * bounds;
        let ry = (self.rng.gen::<f32>() - 0.5) * (bounds * REJECT_BOUNDS_Y_RATIO);
        self.no_offset = Vec2::new(rx, ry);
        self.rejection_index = (self.rejection_index + 1) % self.messages.len().max(1);
        self.yes_growth = (self.yes_growth + device.yes_growth_step()).min(YES_GROWTH_MAX);
        log::info!(
            "[reject] {:?} -> index={} growth={:.2} offset=({:.0},{:.0})",
            trigger,
            self.rejection_index,
            self.yes_growth,
            rx,
            ry
        );
        Some(RejectOutcome {
            rejection_index: self.rejection_index,
            yes_growth: self.yes_growth,
            no_offset: self.no_offset,
        })
    }

    /// Handle a confirm. Only the first one while asking has any effect.
    pub fn confirm(&mut self, device: DeviceClass) -> Option<Celebration> {
        if self.phase == Phase::Accepted {
            log::debug!("[confirm] already accepted; ignoring");
            return None;
        }
        self.phase = Phase::Accepted;
        log::info!(
            "[confirm] accepted after {} rejection label(s)",
            self.rejection_index
        );
        Some(Celebration {
            particle_count: device.confetti_count(),
            colors: &CONFETTI_COLORS,
        })
    }
}
