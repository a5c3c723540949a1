//! The four scenes and the closed enum that dispatches between them.

pub mod gate;
pub mod mem;
pub mod mirror;
pub mod se;

pub use gate::{gate_hue, hatch_rotation, GateScene};
pub use mem::{LineParticle, MemScene};
pub use mirror::{MirrorScene, TrailPoint};
pub use se::SeScene;

use crate::error::SceneError;
use crate::state::FrameInput;
use crate::surface::Painter;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// "Self Encryption": scratch a mask to reveal text.
    Se,
    /// "Delay Mirror": a fading trail following the pointer.
    SelfMirror,
    /// "Linear Particles + Time": short-lived strokes over a drifting band.
    Mem,
    /// "Color Hatch": rotating hatch field under a fixed border.
    Gate,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::Se,
        SceneKind::SelfMirror,
        SceneKind::Mem,
        SceneKind::Gate,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            SceneKind::Se => "se",
            SceneKind::SelfMirror => "self",
            SceneKind::Mem => "mem",
            SceneKind::Gate => "gate",
        }
    }
}

impl FromStr for SceneKind {
    type Err = SceneError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "se" => Ok(SceneKind::Se),
            "self" => Ok(SceneKind::SelfMirror),
            "mem" => Ok(SceneKind::Mem),
            "gate" => Ok(SceneKind::Gate),
            other => Err(SceneError::UnknownTag(other.to_string())),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

pub enum Scene<P: Painter> {
    Se(SeScene<P>),
    SelfMirror(MirrorScene),
    Mem(MemScene),
    Gate(GateScene<P>),
}

impl<P: Painter> Scene<P> {
    /// Builds the scene for `kind`, sizing any private rasters to `surface`.
    pub fn new(kind: SceneKind, surface: &P) -> Result<Self, SceneError> {
        let scene = match kind {
            SceneKind::Se => Scene::Se(SeScene::new(surface)?),
            SceneKind::SelfMirror => Scene::SelfMirror(MirrorScene::new(surface.center())),
            SceneKind::Mem => Scene::Mem(MemScene::new()),
            SceneKind::Gate => Scene::Gate(GateScene::new(surface)?),
        };
        let (w, h) = surface.size();
        log::debug!("[scene] built {} for {}x{}", kind, w, h);
        Ok(scene)
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Se(_) => SceneKind::Se,
            Scene::SelfMirror(_) => SceneKind::SelfMirror,
            Scene::Mem(_) => SceneKind::Mem,
            Scene::Gate(_) => SceneKind::Gate,
        }
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, painter: &mut P, input: &FrameInput, rng: &mut R) {
        match self {
            Scene::Se(s) => s.draw(painter, input, rng),
            Scene::SelfMirror(s) => s.draw(painter, input),
            Scene::Mem(s) => s.draw(painter, input, rng),
            Scene::Gate(s) => s.draw(painter, input, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in SceneKind::ALL {
            assert_eq!(kind.tag().parse::<SceneKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(
            "SE".parse::<SceneKind>(),
            Err(SceneError::UnknownTag("SE".into()))
        );
        assert!("".parse::<SceneKind>().is_err());
    }
}
