use std::path::PathBuf;

use termcolor::ColorChoice;

use crate::{debug::Cpu, util};

pub fn ensure_existing_file(p: PathBuf) -> anyhow::Result<PathBuf> {
    if !p.exists() {anyhow::bail!("Path does not exist")} else
    if !p.is_file() {anyhow::bail!("Path is not a file")} else
    {Ok(p)}
}

pub static CPU_VALUES: [&'static str; 4] = [
    "8086",
    "8088",
    "80186",
    "80188",
];

pub fn cpu_value_parser(value: String) -> anyhow::Result<Cpu> {
    value.parse()
}

pub static COLOR_VALUES: [&'static str; 3] = [
    "auto",
    "always",
    "never",
];

pub fn color_value_parser(value: String) -> anyhow::Result<ColorChoice> {
    match value.as_str() {
        "auto" => Ok(ColorChoice::Auto),
        "always" => Ok(ColorChoice::Always),
        "never" => Ok(ColorChoice::Never),
        _ => unreachable!("invalid value should be caught by PossibleValuesParser")
    }
}

// Newtype so clap treats the whole string as one value, not a Vec of args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

pub fn hex_bytes_parser(value: &str) -> anyhow::Result<HexBytes> {
    util::parse_hex_bytes(value).map(HexBytes)
}

pub fn addr_value_parser(value: &str) -> anyhow::Result<u16> {
    util::parse_addr(value)
}
