pub mod mnemonic;
pub mod opcode_map;
pub mod listing;
pub mod options;

pub use mnemonic::{Cpu, Mnemonic};
pub use opcode_map::{opcode_name, lookup, MnemonicTable, TABLE};
