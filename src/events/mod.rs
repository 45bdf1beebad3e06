pub mod binding;
pub mod line;
pub mod modifiers;

pub use binding::{BindRecord, Submap};
pub use line::Line;
pub use modifiers::ModifierSet;
