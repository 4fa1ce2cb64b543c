//! Native consumers of the relay's SSE stream: the chart feed, the 3D scene
//! state with its chase-camera rig, and the terminal `watch` loop driving
//! both off a single subscription.

pub mod camera;
pub mod chart;
pub mod scene;
pub mod sse;
pub mod watch;

pub use camera::CameraRig;
pub use chart::ChartFeed;
pub use scene::SceneConsumer;
pub use sse::FrameDecoder;
