pub mod scene;
pub mod stream;
pub mod ticker;

pub use scene::{Scene, STREAM_COUNT};
pub use stream::{AnimationStream, StreamState, TRAIL_LENGTH};
pub use ticker::{Ticker, TICK_INTERVAL};
