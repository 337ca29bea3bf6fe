pub mod opcode;
pub mod operation;
pub mod record;
mod util;

pub use opcode::{OpcodeRegistry, STANDARD_REGISTRY};
pub use operation::GattOperation;
pub use record::{AttRecord, LinkContext};
pub use util::parse_hex_u16;
