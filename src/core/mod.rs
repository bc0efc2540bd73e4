pub mod clock;
pub mod input_adapter;
pub mod navigation;
pub mod position_updater;
pub mod session;

pub use clock::Clock;
pub use input_adapter::WinitScrollAdapter;
pub use navigation::{NavigationConfig, NavigationPhase, NavigationState, Navigator, Smoothing};
pub use position_updater::{PositionUpdater, DEFAULT_LOOK_AHEAD};
pub use session::NavigationSession;
