//! Chakra overlay library for decorating a live video feed.
//!
//! This library derives on-screen positions for seven decorative "chakra"
//! markers from the body and face landmarks produced by an external
//! pose/face detector. The detector, the camera, and the rendering surface
//! all live outside this crate; what lives here is:
//! 1. The landmark-to-marker projector: linear interpolation along the
//!    hip-shoulder axis, the third-eye midpoint, and the crown
//!    extrapolation toward the top of the head
//! 2. Pixel-space placement and visibility of the marker glyphs
//! 3. Frame replay sources and marker publication sinks for running the
//!    pipeline outside a browser
//!
//! # Examples
//!
//! ## Projecting a frame
//!
//! ```
//! use chakra_overlay::landmark::{FrameLandmarks, Landmark};
//! use chakra_overlay::projector::{ChakraProjector, ProjectorConfig};
//!
//! let mut projector = ChakraProjector::new(ProjectorConfig::default());
//!
//! // A body detection: 33 landmarks, normalized to the video frame
//! let frame = FrameLandmarks {
//!     pose: (0..33)
//!         .map(|i| Landmark::new(0.5, i as f32 / 40.0, 0.0))
//!         .collect(),
//!     face: vec![],
//! };
//!
//! assert!(projector.update(&frame));
//! for marker in projector.markers() {
//!     println!("({}, {}) visible={}", marker.left, marker.top, marker.visible);
//! }
//! ```
//!
//! ## Replaying a recording
//!
//! ```no_run
//! use chakra_overlay::app::{AppConfig, ChakraApp};
//! use chakra_overlay::config::Config;
//! use chakra_overlay::source::FrameSource;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app_config = AppConfig {
//!     frame_source: FrameSource::File("session.jsonl".into()),
//!     config: Config::default(),
//! };
//!
//! let mut app = ChakraApp::new(app_config)?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Main application loop wiring source, projector, and sinks
pub mod app;

/// Configuration management
pub mod config;

/// Landmark indices, chakra counts, and display defaults
pub mod constants;

/// Error types
pub mod error;

/// Landmark point types and linear interpolation
pub mod landmark;

/// Landmark-to-marker projection
pub mod projector;

/// 3D scene mirroring of chakra positions
pub mod scene;

/// Marker publication adapters
pub mod sink;

/// Frame record sources
pub mod source;

pub use error::{Error, Result};
