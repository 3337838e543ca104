pub mod animated;
pub mod axis;
pub mod color;
pub mod formatter;
pub mod viewport;

pub use animated::{AnimatedPoint, AnimatedScalar, AnimatedTriple};
pub use axis::{Axis, AxisValue};
pub use color::Color;
pub use formatter::ValueFormatter;
pub use viewport::Viewport;
