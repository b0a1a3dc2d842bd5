pub mod autoplay;
pub mod ball;
pub mod collision;
pub mod scoring;

pub use autoplay::*;
pub use ball::*;
pub use collision::*;
pub use scoring::*;
