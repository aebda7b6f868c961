use glam::{Vec2, Vec3};
use morphos_core::constants::{POINTER_ACTIVE_LIMIT, POINTER_INACTIVE, SPHERE_BASE_RADIUS};
use morphos_core::math::Ray;
use morphos_core::ShapeKind;

/// One frame of pointer input: normalized coordinates, the unprojected ray
/// and the activation (pinch/click) signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub ndc: Vec2,
    pub ray: Option<Ray>,
    pub activation: bool,
}

impl PointerSample {
    pub fn new(ndc: Vec2, ray: Ray, activation: bool) -> Self {
        Self {
            ndc,
            ray: Some(ray),
            activation,
        }
    }

    /// No pointer present.
    pub fn inactive() -> Self {
        Self {
            ndc: Vec2::splat(POINTER_INACTIVE),
            ray: None,
            activation: false,
        }
    }

    /// Whether the sample carries a usable pointer.
    pub fn is_active(&self) -> bool {
        self.ray.is_some()
            && self.ndc.is_finite()
            && self.ndc.abs().max_element() <= POINTER_ACTIVE_LIMIT
    }
}

impl Default for PointerSample {
    fn default() -> Self {
        Self::inactive()
    }
}

/// Emitted once per activation-and-hold over the hittable shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcquisitionEvent {
    /// Pointer coordinates at acquisition time.
    pub x: f32,
    pub y: f32,
}

/// Per-frame result of pointer resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionOutcome {
    /// Interaction point on the z=0 plane, if any.
    pub point: Option<Vec3>,
    /// Pointer ray hits the active shape's bounding sphere.
    pub hit: bool,
    pub event: Option<AcquisitionEvent>,
}

/// Owns the edge-triggered pinch latch.
#[derive(Debug, Clone, Default)]
pub struct InteractionResolver {
    pinch_triggered: bool,
}

impl InteractionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_latched(&self) -> bool {
        self.pinch_triggered
    }

    /// Resolve the pointer against the plane and, for the hittable shape,
    /// against a sphere of radius `SPHERE_BASE_RADIUS · effective_scale`.
    pub fn resolve(
        &mut self,
        sample: &PointerSample,
        shape: ShapeKind,
        effective_scale: f32,
    ) -> InteractionOutcome {
        let ray = match sample.ray {
            Some(ray) if sample.is_active() => ray,
            _ => {
                self.pinch_triggered = false;
                return InteractionOutcome::default();
            }
        };

        let point = ray.intersect_z_plane();
        let hit = shape.is_hittable() && ray.hits_origin_sphere(SPHERE_BASE_RADIUS * effective_scale);
        let event = self.update_latch(hit, sample.activation).then_some(AcquisitionEvent {
            x: sample.ndc.x,
            y: sample.ndc.y,
        });

        InteractionOutcome { point, hit, event }
    }

    /// Advance the latch. Returns true on the rising edge of `hit && activation`.
    pub fn update_latch(&mut self, hit: bool, activation: bool) -> bool {
        if hit && activation {
            if self.pinch_triggered {
                return false;
            }
            self.pinch_triggered = true;
            true
        } else {
            self.pinch_triggered = false;
            false
        }
    }
}
