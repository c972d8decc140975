//! Hero banner text with its fade-out / swap / fade-in transition.
//!
//! The transition is a small time-driven state machine: `retarget` starts a
//! fade-out, `tick` swaps the text once the fade-out has run its course and
//! then runs the fade-in. Time is seconds since start, as elsewhere in the
//! view layer.

/// Seconds to fade the old text out.
pub const FADE_OUT_SECS: f32 = 0.3;
/// Seconds to fade the new text in.
pub const FADE_IN_SECS: f32 = 0.5;
/// Upward drift while faded out, in logical pixels.
pub const LIFT_PX: f32 = 20.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroText {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Out { start: f32, from: f32 },
    In { start: f32 },
}

#[derive(Debug, Clone)]
pub struct HeroFade {
    shown: HeroText,
    pending: Option<HeroText>,
    phase: Phase,
}

impl Default for HeroFade {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroFade {
    pub fn new() -> Self {
        Self {
            shown: HeroText::default(),
            pending: None,
            phase: Phase::Idle,
        }
    }

    /// Text currently on screen.
    pub fn shown(&self) -> &HeroText {
        &self.shown
    }

    /// Text that will appear once the fade-out completes.
    pub fn pending(&self) -> Option<&HeroText> {
        self.pending.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start fading towards `text`. A retarget during a running transition
    /// fades out from the current opacity; the latest text wins.
    pub fn retarget(&mut self, text: HeroText, t: f32) {
        let from = self.opacity(t);
        self.pending = Some(text);
        self.phase = Phase::Out { start: t, from };
    }

    /// Advance to time `t`. Returns true when the shown text changed.
    pub fn tick(&mut self, t: f32) -> bool {
        let mut swapped = false;
        if let Phase::Out { start, .. } = self.phase {
            if t - start >= FADE_OUT_SECS {
                if let Some(text) = self.pending.take() {
                    swapped = text != self.shown;
                    self.shown = text;
                }
                self.phase = Phase::In {
                    start: start + FADE_OUT_SECS,
                };
            }
        }
        if let Phase::In { start } = self.phase {
            if t - start >= FADE_IN_SECS {
                self.phase = Phase::Idle;
            }
        }
        swapped
    }

    /// Opacity at time `t` (0.0 - 1.0).
    pub fn opacity(&self, t: f32) -> f32 {
        match self.phase {
            Phase::Idle => 1.0,
            Phase::Out { start, from } => from * (1.0 - ease_out(progress(t, start, FADE_OUT_SECS))),
            Phase::In { start } => ease_out(progress(t, start, FADE_IN_SECS)),
        }
    }

    /// Vertical offset at time `t` (negative is up).
    pub fn offset_y(&self, t: f32) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Out { start, .. } => -LIFT_PX * ease_out(progress(t, start, FADE_OUT_SECS)),
            Phase::In { start } => -LIFT_PX * (1.0 - ease_out(progress(t, start, FADE_IN_SECS))),
        }
    }
}

fn progress(t: f32, start: f32, duration: f32) -> f32 {
    ((t - start) / duration).clamp(0.0, 1.0)
}

/// Quadratic ease-out.
fn ease_out(p: f32) -> f32 {
    1.0 - (1.0 - p) * (1.0 - p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(title: &str) -> HeroText {
        HeroText {
            title: title.into(),
            subtitle: "SERIES".into(),
            description: "desc".into(),
        }
    }

    #[test]
    fn text_swaps_at_midpoint() {
        let mut hero = HeroFade::new();
        hero.retarget(text("TRENDING"), 0.0);

        assert!(!hero.tick(0.1));
        assert_eq!(hero.shown().title, "");
        assert!(hero.opacity(0.1) < 1.0);

        assert!(hero.tick(0.31));
        assert_eq!(hero.shown().title, "TRENDING");
        assert!(hero.opacity(0.31) < 0.1);
        assert!(hero.is_animating());

        hero.tick(0.9);
        assert!(!hero.is_animating());
        assert_eq!(hero.opacity(0.9), 1.0);
        assert_eq!(hero.offset_y(0.9), 0.0);
    }

    #[test]
    fn large_step_finishes_both_phases() {
        let mut hero = HeroFade::new();
        hero.retarget(text("BLOCKBUSTER"), 1.0);
        assert!(hero.tick(5.0));
        assert!(!hero.is_animating());
        assert_eq!(hero.shown().title, "BLOCKBUSTER");
    }

    #[test]
    fn latest_retarget_wins() {
        let mut hero = HeroFade::new();
        hero.retarget(text("TRENDING"), 0.0);
        hero.tick(0.2);
        hero.retarget(text("LATEST"), 0.2);
        hero.tick(0.45);
        assert_eq!(hero.shown().title, "");
        hero.tick(0.6);
        assert_eq!(hero.shown().title, "LATEST");
        assert!(hero.pending().is_none());
    }

    #[test]
    fn same_text_does_not_report_swap() {
        let mut hero = HeroFade::new();
        hero.retarget(text("YOUR"), 0.0);
        hero.tick(1.0);
        hero.retarget(text("YOUR"), 2.0);
        assert!(!hero.tick(3.0));
        assert_eq!(hero.shown().title, "YOUR");
    }

    #[test]
    fn fade_out_drifts_up() {
        let mut hero = HeroFade::new();
        hero.retarget(text("JOIN THE"), 0.0);
        assert!(hero.offset_y(0.15) < 0.0);
        assert!((hero.offset_y(0.3) + LIFT_PX).abs() < 1e-4);
    }
}
