pub mod color;
pub mod constants;
pub mod error;
pub mod pointer;
pub mod resize;
pub mod scene;
pub mod state;
pub mod surface;
pub mod text;

pub use color::*;
pub use constants::*;
pub use error::*;
pub use pointer::*;
pub use resize::*;
pub use scene::*;
pub use state::*;
pub use surface::*;
pub use text::*;
