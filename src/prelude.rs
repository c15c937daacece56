/* 

This is intended to quickly import commonly used modules across
the align tools crate.

@date: 8 Nov, 2025
@author: bartu
*/

// Almost every module uses tracing, so I'm adding it here
pub use tracing::{info, warn, debug};
pub use smart_default::SmartDefault;
pub use serde::{Deserialize};

pub use crate::numeric::{*};
pub use crate::axis::{Axis, AxisFlags};
