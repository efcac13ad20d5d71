//! Motion controller and the timing-source seam.

mod driver;
mod timer;

pub use driver::MotionController;
pub use timer::StepTimer;
