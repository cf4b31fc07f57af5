//! Delayed reveal of the letter after acceptance.

/// One-shot timer that flips `visible` once its deadline passes.
///
/// The deadline is checked against the host clock on every `poll`, so the
/// letter appears on the first tick at or after `scheduled_at + delay`. Once
/// fired it can only be hidden again by `dismiss`; nothing re-arms it.
#[derive(Clone, Debug)]
pub struct RevealSequencer {
    delay_sec: f64,
    deadline: Option<f64>,
    fired: bool,
    visible: bool,
}

impl RevealSequencer {
    pub fn new(delay_sec: f64) -> Self {
        Self {
            delay_sec,
            deadline: None,
            fired: false,
            visible: false,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm the timer at `now_sec`. Later calls are ignored.
    pub fn schedule(&mut self, now_sec: f64) {
        if self.fired || self.deadline.is_some() {
            return;
        }
        self.deadline = Some(now_sec + self.delay_sec);
        log::debug!("[reveal] letter scheduled for t={:.3}", now_sec + self.delay_sec);
    }

    /// Returns true on the tick the letter becomes visible.
    pub fn poll(&mut self, now_sec: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_sec >= deadline => {
                self.deadline = None;
                self.fired = true;
                self.visible = true;
                log::info!("[reveal] letter shown at t={:.3}", now_sec);
                true
            }
            _ => false,
        }
    }

    /// Hide the letter. A dismiss that lands before the deadline cancels it.
    pub fn dismiss(&mut self) {
        if self.deadline.take().is_some() {
            self.fired = true;
            log::debug!("[reveal] pending letter cancelled by dismiss");
        } else if self.visible {
            log::info!("[reveal] letter dismissed");
        }
        self.visible = false;
    }
}
