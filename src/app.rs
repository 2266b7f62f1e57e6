//! Main application module for the chakra overlay pipeline.

use crate::{
    config::Config,
    error::Result,
    projector::ChakraProjector,
    scene::{ChakraScene, SceneSink},
    sink::{JsonLinesSink, MarkerSink},
    source::{FrameReader, FrameSource},
};
use log::{debug, info};
use std::{fs::File, io};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Frame record source
    pub frame_source: FrameSource,
    /// Geometry and output settings
    pub config: Config,
}

/// Main application struct.
///
/// Owns the frame source, the projector, and the output sinks; one `update`
/// per frame, driven to completion by [`run`](Self::run). The loop is
/// single-threaded — the next frame is only read after the previous frame's
/// projection and publication complete.
pub struct ChakraApp {
    reader: FrameReader,
    projector: ChakraProjector,
    sinks: Vec<Box<dyn MarkerSink>>,
}

impl ChakraApp {
    /// Create the application: marker output on stdout, plus the scene
    /// mirror file when enabled
    pub fn new(app_config: AppConfig) -> Result<Self> {
        info!("Initializing chakra overlay pipeline");
        app_config.config.validate()?;

        let reader = FrameReader::open(&app_config.frame_source)?;
        let projector = ChakraProjector::new(app_config.config.projector_config());
        info!(
            "Projecting {} chakra markers onto a {}x{} display",
            projector.config().chakra_count(),
            app_config.config.display.width,
            app_config.config.display.height,
        );

        let mut sinks: Vec<Box<dyn MarkerSink>> = vec![Box::new(JsonLinesSink::new(io::stdout()))];
        if app_config.config.scene.enabled {
            let path = &app_config.config.scene.output;
            info!("Mirroring chakras into 3D scene output: {}", path.display());
            let scene = ChakraScene::new(&app_config.config);
            sinks.push(Box::new(SceneSink::new(scene, File::create(path)?)));
        }

        Ok(Self {
            reader,
            projector,
            sinks,
        })
    }

    /// Assemble an application from already-built parts
    pub fn with_parts(
        reader: FrameReader,
        projector: ChakraProjector,
        sinks: Vec<Box<dyn MarkerSink>>,
    ) -> Self {
        Self {
            reader,
            projector,
            sinks,
        }
    }

    /// Drain the frame source, projecting each frame and publishing the
    /// marker state to every sink. Frames with missing required landmarks
    /// keep the previous marker state. Returns when the source is exhausted.
    pub fn run(&mut self) -> Result<()> {
        let mut processed: u64 = 0;
        let mut skipped: u64 = 0;

        while let Some(frame) = self.reader.next_frame()? {
            processed += 1;
            if !self.projector.update(&frame) {
                skipped += 1;
                debug!("frame {processed}: skipped, republishing previous markers");
            }

            for sink in &mut self.sinks {
                sink.publish(self.projector.markers(), self.projector.points())?;
            }
        }

        info!("Processed {processed} frames ({skipped} skipped)");
        Ok(())
    }
}
