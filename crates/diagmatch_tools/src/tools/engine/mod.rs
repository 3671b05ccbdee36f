//! Engine output tools.

mod godot;

pub use godot::GodotTool;
