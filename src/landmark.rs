//! Landmark types shared between the detector boundary and the projector.

use serde::{Deserialize, Serialize};

/// A single detector landmark, with x and y normalized to [0,1] relative to
/// the video frame. The z sign convention comes from the external detector
/// (more negative is closer to the camera).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from its components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Linear interpolation between two landmarks, component-wise:
/// `p1 + t * (p2 - p1)`. Values of `t` outside [0,1] extrapolate past the
/// endpoints.
pub fn lerp(p1: Landmark, p2: Landmark, t: f32) -> Landmark {
    Landmark {
        x: (p2.x - p1.x) * t + p1.x,
        y: (p2.y - p1.y) * t + p1.y,
        z: (p2.z - p1.z) * t + p1.z,
    }
}

/// Per-frame detection result handed to the projector. Either sequence may
/// be empty when the corresponding model found nothing in the frame; no
/// frame state outlives the single projection pass that consumes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameLandmarks {
    /// Body landmarks, indexed 0-32
    #[serde(default)]
    pub pose: Vec<Landmark>,

    /// Face landmarks, indexed 0-477
    #[serde(default)]
    pub face: Vec<Landmark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let p1 = Landmark::new(0.1, 0.2, 0.3);
        let p2 = Landmark::new(0.9, 0.6, -0.3);

        assert_eq!(lerp(p1, p2, 0.0), p1);
        assert_eq!(lerp(p1, p2, 1.0), p2);
    }

    #[test]
    fn test_lerp_midpoint() {
        let p1 = Landmark::new(0.0, 0.0, 0.0);
        let p2 = Landmark::new(1.0, 0.5, -1.0);

        let mid = lerp(p1, p2, 0.5);
        assert!((mid.x - 0.5).abs() < 1e-6);
        assert!((mid.y - 0.25).abs() < 1e-6);
        assert!((mid.z + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_is_linear_in_t() {
        let p1 = Landmark::new(0.2, 0.8, 0.1);
        let p2 = Landmark::new(0.7, 0.3, -0.4);

        // lerp(t) - p1 must scale linearly with t, per component
        let quarter = lerp(p1, p2, 0.25);
        let half = lerp(p1, p2, 0.5);
        assert!(((half.x - p1.x) - 2.0 * (quarter.x - p1.x)).abs() < 1e-6);
        assert!(((half.y - p1.y) - 2.0 * (quarter.y - p1.y)).abs() < 1e-6);
        assert!(((half.z - p1.z) - 2.0 * (quarter.z - p1.z)).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_extrapolates() {
        let p1 = Landmark::new(0.0, 0.0, 0.0);
        let p2 = Landmark::new(1.0, 1.0, 0.0);

        let below = lerp(p1, p2, -0.1);
        let above = lerp(p1, p2, 1.1);
        assert!((below.x + 0.1).abs() < 1e-6);
        assert!((above.x - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_frame_deserializes_with_missing_sequences() {
        let frame: FrameLandmarks = serde_json::from_str("{}").unwrap();
        assert!(frame.pose.is_empty());
        assert!(frame.face.is_empty());

        let frame: FrameLandmarks =
            serde_json::from_str(r#"{"pose": [{"x": 0.5, "y": 0.5}]}"#).unwrap();
        assert_eq!(frame.pose.len(), 1);
        assert_eq!(frame.pose[0].z, 0.0);
        assert!(frame.face.is_empty());
    }
}
