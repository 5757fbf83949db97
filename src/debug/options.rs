use termcolor::ColorChoice;

use super::mnemonic::Cpu;

pub struct Options {
    /// Address of the first listed byte.
    pub base_addr: u16,
    /// Target CPU; entries needing a newer one are flagged in listings.
    pub cpu: Cpu,
    pub color: ColorChoice,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_addr: 0,
            cpu: Cpu::default(),
            color: ColorChoice::Auto,
        }
    }
}
