pub mod notation;
pub mod pitch;

pub use notation::NotationStyle;
pub use pitch::{BaseNote, PitchName};
