pub mod arith16;
pub mod arith32;
#[cfg(feature = "carry-ops")]
pub mod carry;
pub mod divide;
pub mod flags;
mod hooks;
pub mod norm;
pub mod shift;
pub mod types;

pub use arith16::*;
pub use arith32::*;
#[cfg(feature = "carry-ops")]
pub use carry::*;
pub use divide::*;
pub use flags::{Ambient, FlagSink, Flags};
pub use norm::*;
pub use shift::*;
pub use types::*;
