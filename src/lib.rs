mod error;
mod op;
mod switch;
mod utils;

pub use error::{Error, Result};
pub use op::SwitchOp;
pub use switch::{BinarySwitch, SwitchState};
pub use utils::{check_non_negative, parse_non_negative};
