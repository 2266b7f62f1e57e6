//! Constants used throughout the chakra overlay pipeline

/// Number of body landmarks produced by the external pose model
pub const NUM_POSE_LANDMARKS: usize = 33;

/// Number of face landmarks produced by the external face model
pub const NUM_FACE_LANDMARKS: usize = 478;

/// Body landmark indices, per the detector's fixed anatomical scheme
pub const POSE_LEFT_EYE_INNER: usize = 1;
pub const POSE_RIGHT_EYE_INNER: usize = 4;
pub const POSE_LEFT_SHOULDER: usize = 11;
pub const POSE_RIGHT_SHOULDER: usize = 12;
pub const POSE_LEFT_HIP: usize = 23;
pub const POSE_RIGHT_HIP: usize = 24;

/// Face landmark index for the top of the head
pub const FACE_TOP_OF_HEAD: usize = 10;

/// Body indices that must all be present for a frame to be projected
pub const REQUIRED_POSE_LANDMARKS: [usize; 6] = [
    POSE_LEFT_EYE_INNER,
    POSE_RIGHT_EYE_INNER,
    POSE_LEFT_SHOULDER,
    POSE_RIGHT_SHOULDER,
    POSE_LEFT_HIP,
    POSE_RIGHT_HIP,
];

/// Number of chakras spaced along the spine segment
pub const SPINE_CHAKRA_COUNT: usize = 5;

/// Chakra count with the crown enabled (spine + third eye + crown)
pub const FULL_CHAKRA_COUNT: usize = 7;

/// Interpolation parameter extending the hip-shoulder axis below the root chakra
pub const SPINE_EXTENSION_LOW: f32 = -0.1;

/// Interpolation parameter extending the hip-shoulder axis above the throat chakra
pub const SPINE_EXTENSION_HIGH: f32 = 1.1;

/// Extrapolation parameter from the throat chakra toward the head apex
pub const CROWN_EXTRAPOLATION: f32 = 1.05;

/// Default rendered video width in pixels
pub const DEFAULT_DISPLAY_WIDTH: f32 = 480.0;

/// Default rendered video height in pixels
pub const DEFAULT_DISPLAY_HEIGHT: f32 = 360.0;

/// Default marker glyph edge length in pixels
pub const DEFAULT_MARKER_SIZE: f32 = 20.0;

/// Default world-space width of the mirrored scene
pub const DEFAULT_SCENE_WIDTH: f32 = 10.0;

/// Default depth scale applied to landmark z values in the scene
pub const DEFAULT_SCENE_DEPTH_SCALE: f32 = 5.0;
