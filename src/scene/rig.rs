//! Camera / globe rig driven by page-focus cues.
//!
//! - Home focus: globe tilt back to 0, camera centred at z = 6
//! - Inner pages: camera slides left and back, globe swings half a turn
//! - Idle spin: the globe keeps turning slowly around y
//! - Narrow viewports: smaller, centred globe with the camera pulled back

use std::f32::consts::PI;

use crate::pages::{PageDescriptor, PageId};

use super::SceneDirector;

/// Idle globe spin, radians per second.
pub const SPIN_PER_SEC: f32 = 0.12;
/// Viewports narrower than this use the compact layout.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// Quadratic ease-out.
    Out,
    /// Cubic-ish in-out ("power2.inOut").
    InOut,
}

impl Ease {
    fn apply(self, p: f32) -> f32 {
        match self {
            Ease::Out => 1.0 - (1.0 - p) * (1.0 - p),
            Ease::InOut => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(3) * 0.5
                }
            }
        }
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn fixed(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            ease: Ease::Out,
        }
    }

    pub fn value(&self, t: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let p = ((t - self.start) / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(p)
    }

    pub fn finished(&self, t: f32) -> bool {
        t - self.start >= self.duration
    }

    /// New tween from the current value at `t` towards `to`.
    fn retarget(&self, t: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from: self.value(t),
            to,
            start: t,
            duration,
            ease,
        }
    }
}

/// Where everything is at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePose {
    pub camera: [f32; 3],
    /// Globe rotation around x and y.
    pub globe_rotation: [f32; 2],
    pub globe_scale: f32,
    pub globe_x: f32,
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    camera_x: Tween,
    camera_z: Tween,
    globe_tilt: Tween,
    globe_turn: Tween,
    globe_scale: f32,
    globe_x: f32,
    compact: bool,
    focused: Option<PageId>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            camera_x: Tween::fixed(0.0),
            camera_z: Tween::fixed(6.0),
            globe_tilt: Tween::fixed(0.0),
            globe_turn: Tween::fixed(0.0),
            globe_scale: 1.0,
            globe_x: 1.2,
            compact: false,
            focused: None,
        }
    }

    /// Switch between the wide and compact layouts for a viewport width.
    pub fn adjust_for_viewport(&mut self, width: f32) {
        let compact = width < COMPACT_BREAKPOINT;
        if compact == self.compact {
            return;
        }
        self.compact = compact;
        if compact {
            self.globe_scale = 0.6;
            self.globe_x = 0.0;
            self.camera_z = Tween::fixed(8.0);
        } else {
            self.globe_scale = 1.0;
            self.globe_x = 1.2;
            self.camera_z = Tween::fixed(6.0);
        }
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn focused(&self) -> Option<PageId> {
        self.focused
    }

    /// Whether any focus transition is still running at `t`.
    pub fn is_moving(&self, t: f32) -> bool {
        !(self.camera_x.finished(t)
            && self.camera_z.finished(t)
            && self.globe_tilt.finished(t)
            && self.globe_turn.finished(t))
    }

    pub fn pose(&self, t: f32) -> ScenePose {
        ScenePose {
            camera: [self.camera_x.value(t), 0.0, self.camera_z.value(t)],
            globe_rotation: [
                self.globe_tilt.value(t),
                self.globe_turn.value(t) + SPIN_PER_SEC * t,
            ],
            globe_scale: self.globe_scale,
            globe_x: self.globe_x,
        }
    }
}

impl SceneDirector for CameraRig {
    fn focus(&mut self, page: &PageDescriptor, t: f32) {
        if page.id == PageId::Home {
            self.globe_tilt = self.globe_tilt.retarget(t, 0.0, 1.0, Ease::Out);
            self.camera_z = self.camera_z.retarget(t, 6.0, 1.5, Ease::Out);
            self.camera_x = self.camera_x.retarget(t, 0.0, 1.5, Ease::Out);
        } else {
            self.camera_z = self.camera_z.retarget(t, 7.0, 1.5, Ease::Out);
            self.camera_x = self.camera_x.retarget(t, -1.0, 1.5, Ease::Out);
            let turned = self.globe_turn.value(t) + PI;
            self.globe_turn = self.globe_turn.retarget(t, turned, 2.0, Ease::InOut);
        }
        self.focused = Some(page.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageRegistry;

    fn page(id: PageId) -> PageDescriptor {
        PageRegistry::aurora().get(id).cloned().unwrap()
    }

    #[test]
    fn inner_page_moves_camera_and_turns_globe() {
        let mut rig = CameraRig::new();
        rig.focus(&page(PageId::Series), 0.0);
        assert!(rig.is_moving(1.0));

        let pose = rig.pose(2.0);
        assert!((pose.camera[0] + 1.0).abs() < 1e-5);
        assert!((pose.camera[2] - 7.0).abs() < 1e-5);
        let turn = pose.globe_rotation[1] - SPIN_PER_SEC * 2.0;
        assert!((turn - PI).abs() < 1e-4);
        assert!(!rig.is_moving(2.0));
    }

    #[test]
    fn idle_spin_matches_two_milliradians_per_frame() {
        let rig = CameraRig::new();
        let per_frame = rig.pose(1.0 / 60.0).globe_rotation[1];
        assert!((per_frame - 0.002).abs() < 1e-6);
        assert!((rig.pose(10.0).globe_rotation[1] - 1.2).abs() < 1e-5);
    }

    #[test]
    fn home_resets_camera() {
        let mut rig = CameraRig::new();
        rig.focus(&page(PageId::Movies), 0.0);
        rig.focus(&page(PageId::Home), 3.0);
        let pose = rig.pose(5.0);
        assert!(pose.camera[0].abs() < 1e-5);
        assert!((pose.camera[2] - 6.0).abs() < 1e-5);
        assert_eq!(rig.focused(), Some(PageId::Home));
    }

    #[test]
    fn refocus_mid_flight_starts_from_current_value() {
        let mut rig = CameraRig::new();
        rig.focus(&page(PageId::News), 0.0);
        let mid = rig.pose(0.5).camera[2];
        rig.focus(&page(PageId::Home), 0.5);
        assert!((rig.pose(0.5).camera[2] - mid).abs() < 1e-5);
    }

    #[test]
    fn compact_viewport_layout() {
        let mut rig = CameraRig::new();
        rig.adjust_for_viewport(500.0);
        assert!(rig.is_compact());
        let pose = rig.pose(0.0);
        assert_eq!(pose.globe_scale, 0.6);
        assert_eq!(pose.globe_x, 0.0);
        assert_eq!(pose.camera[2], 8.0);

        rig.adjust_for_viewport(1280.0);
        let pose = rig.pose(0.0);
        assert_eq!(pose.globe_scale, 1.0);
        assert_eq!(pose.globe_x, 1.2);
    }

    #[test]
    fn ease_endpoints() {
        for ease in [Ease::Out, Ease::InOut] {
            assert!(ease.apply(0.0).abs() < 1e-6);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }
}
