//! Scene seam: the router tells the 3D scene which page has focus.
//!
//! Drawing the globe is not this crate's job. `SceneDirector` is the cue
//! interface; [`rig::CameraRig`] tracks where the camera and globe should be
//! so a renderer can read a pose each frame.

pub mod rig;

pub use rig::{CameraRig, ScenePose};

use crate::pages::{PageDescriptor, PageId};

/// Receiver of page-focus cues. Cues are fire-and-forget: the router never
/// waits for a scene transition to finish.
pub trait SceneDirector {
    /// Page `page` became active at time `t` (seconds).
    fn focus(&mut self, page: &PageDescriptor, t: f32);
}

/// Director that only remembers the cues it received.
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    pub cues: Vec<PageId>,
}

impl CueLog {
    pub fn last(&self) -> Option<PageId> {
        self.cues.last().copied()
    }
}

impl SceneDirector for CueLog {
    fn focus(&mut self, page: &PageDescriptor, _t: f32) {
        self.cues.push(page.id);
    }
}
