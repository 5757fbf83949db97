pub mod debug;
pub mod util;
pub mod clapx;

pub use debug::{opcode_name, Cpu, Mnemonic};

#[cfg(test)]
mod tests;
