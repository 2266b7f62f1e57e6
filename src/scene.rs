//! 3D mirroring of chakra positions.
//!
//! One demo variant places the chakras in a rudimentary 3D scene alongside
//! the flat overlay. The scene keeps the video frame centered at the world
//! origin: x mirrored about the frame center (the overlay shows the user a
//! mirror image), y flipped so up is positive, z scaled into world units
//! with positive values toward the viewer.

use crate::{config::Config, landmark::Landmark, projector::Marker, sink::MarkerSink, Result};
use glam::Vec3;
use std::io::Write;

/// Maps normalized chakra positions into world space
#[derive(Debug, Clone, Copy)]
pub struct ChakraScene {
    width: f32,
    height: f32,
    depth_scale: f32,
}

impl ChakraScene {
    /// Build a scene whose frame aspect ratio matches the display
    pub fn new(config: &Config) -> Self {
        let aspect = config.display.height / config.display.width;
        Self {
            width: config.scene.width,
            height: config.scene.width * aspect,
            depth_scale: config.scene.depth_scale,
        }
    }

    /// World-space position for one normalized landmark point
    pub fn mirror_point(&self, point: Landmark) -> Vec3 {
        Vec3::new(
            (0.5 - point.x) * self.width,
            (0.5 - point.y) * self.height,
            -point.z * self.depth_scale,
        )
    }

    /// Mirror the visible chakras into world space. Hidden markers (and the
    /// degenerate crown placeholder, which is never visible) are left out.
    pub fn mirror(&self, points: &[Landmark], markers: &[Marker]) -> Vec<Vec3> {
        points
            .iter()
            .zip(markers)
            .filter(|(_, marker)| marker.visible)
            .map(|(&point, _)| self.mirror_point(point))
            .collect()
    }
}

/// Publishes world positions of the visible chakras as JSON lines
pub struct SceneSink<W: Write> {
    scene: ChakraScene,
    writer: W,
}

impl<W: Write> SceneSink<W> {
    pub fn new(scene: ChakraScene, writer: W) -> Self {
        Self { scene, writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MarkerSink for SceneSink<W> {
    fn publish(&mut self, markers: &[Marker], points: &[Landmark]) -> Result<()> {
        let world: Vec<[f32; 3]> = self
            .scene
            .mirror(points, markers)
            .iter()
            .map(|v| v.to_array())
            .collect();
        serde_json::to_writer(&mut self.writer, &world)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "scene"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scene() -> ChakraScene {
        ChakraScene::new(&Config::default())
    }

    #[test]
    fn test_frame_center_maps_to_origin() {
        let world = test_scene().mirror_point(Landmark::new(0.5, 0.5, 0.0));
        assert!(world.length() < 1e-6);
    }

    #[test]
    fn test_orientation() {
        let scene = test_scene();

        // Left edge of the frame mirrors to positive x
        let left_edge = scene.mirror_point(Landmark::new(0.0, 0.5, 0.0));
        assert!(left_edge.x > 0.0);

        // Top of the frame is up in world space
        let top_edge = scene.mirror_point(Landmark::new(0.5, 0.0, 0.0));
        assert!(top_edge.y > 0.0);

        // Detector z is negative toward the camera; world z is positive
        // toward the viewer
        let near = scene.mirror_point(Landmark::new(0.5, 0.5, -0.2));
        assert!(near.z > 0.0);
    }

    #[test]
    fn test_hidden_markers_are_not_mirrored() {
        let scene = test_scene();
        let points = [Landmark::new(0.5, 0.5, 0.0), Landmark::default()];
        let markers = [
            Marker {
                left: 230.0,
                top: 170.0,
                visible: true,
            },
            Marker {
                left: -10.0,
                top: -10.0,
                visible: false,
            },
        ];

        assert_eq!(scene.mirror(&points, &markers).len(), 1);
    }
}
