use glam::Vec2;
use morphos_core::ShapeKind;

/// Maximum number of host commands queued per frame.
pub const MAX_COMMANDS: usize = 64;

/// Host command, applied at the top of the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    SetShape(ShapeKind),
    SetTargetScale(f32),
    SetTargetRotation(Vec2),
}
