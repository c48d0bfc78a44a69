pub mod animation;
pub mod input;
pub mod player;

pub use animation::{AnimationKey, AnimationTag, select_animation};
pub use input::InputIntent;
pub use player::Player;
