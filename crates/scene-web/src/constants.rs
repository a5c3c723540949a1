// DOM contract for the scene page.

pub const CANVAS_SELECTOR: &str = ".scene-canvas";
pub const SCENE_ATTRIBUTE: &str = "data-scene";
pub const HATCH_INPUT_ID: &str = "hatchAngle"; // optional range control
pub const CONTEXT_2D: &str = "2d";
