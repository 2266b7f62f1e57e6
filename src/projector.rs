//! Landmark-to-marker projection.
//!
//! Derives the on-screen chakra marker positions for one frame: five spine
//! chakras spaced along the (slightly extended) hip-shoulder axis, a third
//! eye chakra between the inner-eye landmarks, and optionally a crown chakra
//! extrapolated from the throat chakra toward the top of the head.

use crate::{
    constants::{
        CROWN_EXTRAPOLATION, FACE_TOP_OF_HEAD, POSE_LEFT_EYE_INNER, POSE_LEFT_HIP,
        POSE_LEFT_SHOULDER, POSE_RIGHT_EYE_INNER, POSE_RIGHT_HIP, POSE_RIGHT_SHOULDER,
        REQUIRED_POSE_LANDMARKS, SPINE_CHAKRA_COUNT, SPINE_EXTENSION_HIGH, SPINE_EXTENSION_LOW,
    },
    landmark::{lerp, FrameLandmarks, Landmark},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Projection geometry parameters
#[derive(Debug, Clone, Copy)]
pub struct ProjectorConfig {
    /// Rendered video width in pixels
    pub display_width: f32,
    /// Rendered video height in pixels
    pub display_height: f32,
    /// Marker glyph edge length in pixels
    pub marker_size: f32,
    /// Project the crown chakra (7 markers instead of 6)
    pub crown_enabled: bool,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            display_width: crate::constants::DEFAULT_DISPLAY_WIDTH,
            display_height: crate::constants::DEFAULT_DISPLAY_HEIGHT,
            marker_size: crate::constants::DEFAULT_MARKER_SIZE,
            crown_enabled: true,
        }
    }
}

impl ProjectorConfig {
    /// Number of marker slots this configuration produces
    pub const fn chakra_count(&self) -> usize {
        if self.crown_enabled {
            crate::constants::FULL_CHAKRA_COUNT
        } else {
            crate::constants::FULL_CHAKRA_COUNT - 1
        }
    }
}

/// One on-screen marker slot: a pixel-space position for the top-left corner
/// of the marker glyph plus its visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub left: f32,
    pub top: f32,
    pub visible: bool,
}

impl Marker {
    const fn hidden() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            visible: false,
        }
    }
}

/// Projects detector landmarks onto a fixed set of marker slots.
///
/// The marker array is allocated once and owned exclusively by the
/// projector; positions are overwritten in place each frame and retained
/// across frames whose required landmarks are missing.
pub struct ChakraProjector {
    config: ProjectorConfig,
    points: Vec<Landmark>,
    markers: Vec<Marker>,
}

impl ChakraProjector {
    /// Create a projector with all markers hidden at the origin
    pub fn new(config: ProjectorConfig) -> Self {
        let count = config.chakra_count();
        Self {
            config,
            points: vec![Landmark::default(); count],
            markers: vec![Marker::hidden(); count],
        }
    }

    /// Current marker state, ordered root to crown
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Normalized chakra positions behind the current markers
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    /// Projection geometry in use
    pub const fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Project one frame onto the marker slots.
    ///
    /// Returns `false` when a required body landmark is missing; the frame
    /// is skipped and every marker keeps its previous position and
    /// visibility. This is the normal degraded path, not an error.
    pub fn update(&mut self, frame: &FrameLandmarks) -> bool {
        let Some(points) = chakra_points(&self.config, &frame.pose, &frame.face) else {
            debug!("required body landmarks missing, markers unchanged");
            return false;
        };

        let half_size = self.config.marker_size / 2.0;
        for ((marker, slot), point) in self.markers.iter_mut().zip(&mut self.points).zip(&points) {
            let left = point.x * self.config.display_width - half_size;
            let top = point.y * self.config.display_height - half_size;
            // Position is checked against the left, right, and top edges
            // only; markers may run past the bottom edge and stay visible.
            let visible = left >= 0.0 && left <= self.config.display_width && top >= 0.0;
            *marker = Marker { left, top, visible };
            *slot = *point;
        }
        true
    }
}

/// Normalized chakra positions for one frame, ordered root to crown, before
/// pixel conversion. Returns `None` when any required body landmark is
/// missing.
///
/// With the crown enabled the result always holds seven points; a missing
/// face degrades the crown to the `(0,0,0)` placeholder rather than
/// shortening the list.
pub fn chakra_points(
    config: &ProjectorConfig,
    pose: &[Landmark],
    face: &[Landmark],
) -> Option<Vec<Landmark>> {
    if REQUIRED_POSE_LANDMARKS.iter().any(|&i| i >= pose.len()) {
        return None;
    }

    let hip_mid = lerp(pose[POSE_LEFT_HIP], pose[POSE_RIGHT_HIP], 0.5);
    let shoulder_mid = lerp(pose[POSE_RIGHT_SHOULDER], pose[POSE_LEFT_SHOULDER], 0.5);
    let third_eye = lerp(pose[POSE_LEFT_EYE_INNER], pose[POSE_RIGHT_EYE_INNER], 0.5);

    // Extend the hip-shoulder axis slightly past both ends so the root and
    // throat chakras sit beyond the anatomical anchor points.
    let spine_start = lerp(hip_mid, shoulder_mid, SPINE_EXTENSION_LOW);
    let spine_end = lerp(hip_mid, shoulder_mid, SPINE_EXTENSION_HIGH);

    let mut points = Vec::with_capacity(config.chakra_count());
    for i in 0..SPINE_CHAKRA_COUNT {
        let t = i as f32 / (SPINE_CHAKRA_COUNT - 1) as f32;
        points.push(lerp(spine_start, spine_end, t));
    }
    points.push(third_eye);

    if config.crown_enabled {
        let throat = points[SPINE_CHAKRA_COUNT - 1];
        match face.get(FACE_TOP_OF_HEAD) {
            Some(&top_of_head) => points.push(lerp(throat, top_of_head, CROWN_EXTRAPOLATION)),
            None => points.push(Landmark::default()),
        }
    }

    Some(points)
}
