
pub mod numeric;
pub mod interval;
pub mod axis;
pub mod error;
pub mod object;
pub mod extent;
pub mod scene;
pub mod selection;
pub mod reference;
pub mod transform;
pub mod request;
pub mod properties;
pub mod align;
pub mod simple;

pub mod prelude;

pub use align::{align_function, execute, OperatorStatus};
pub use request::AlignmentRequest;
pub use scene::{ObjectId, Scene, SceneContext};
