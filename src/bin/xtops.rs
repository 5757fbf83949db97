use xtops::{
    clapx::{self, ensure_existing_file, HexBytes, COLOR_VALUES, CPU_VALUES},
    debug::{listing, options::Options, Cpu},
    util,
};

use std::{fs, path::PathBuf};
use anyhow::{bail, Context, Result};
use clap::{Parser, builder::{PathBufValueParser, PossibleValuesParser, TypedValueParser}};
use termcolor::{ColorChoice, StandardStream};

/// Print the 8086/80186 mnemonic for every byte of an instruction stream.
#[derive(Parser)]
#[command(name = "xtops", version = env!("GIT_VERSION"))]
struct Args {
    #[arg(value_parser = PathBufValueParser::new().try_map(ensure_existing_file), conflicts_with = "hex")]
    file: Option<PathBuf>,

    /// Bytes to list, e.g. "90 C8 0F"
    #[arg(short = 'x', long = "hex", value_parser = clapx::hex_bytes_parser)]
    hex: Option<HexBytes>,

    /// Address of the first input byte (hex)
    #[arg(short = 'b', long = "base", value_parser = clapx::addr_value_parser)]
    base: Option<u16>,

    #[arg(short = 's', long = "skip", default_value_t = 0)]
    skip: usize,

    #[arg(short = 'n', long = "count")]
    count: Option<usize>,

    #[arg(short = 'c', long = "cpu", value_parser = PossibleValuesParser::new(CPU_VALUES).try_map(clapx::cpu_value_parser))]
    cpu: Option<Cpu>,

    #[arg(long = "color", value_parser = PossibleValuesParser::new(COLOR_VALUES).try_map(clapx::color_value_parser))]
    color: Option<ColorChoice>,

    /// Dump the whole opcode table instead of a listing
    #[arg(short = 't', long = "table")]
    table: bool,
}

fn main() -> Result<()> {
    color_backtrace::install();

    let args = Args::parse();

    let mut opts = Options::default();
    if let Some(cpu) = args.cpu { opts.cpu = cpu; }
    if let Some(color) = args.color { opts.color = color; }

    let mut stdout = StandardStream::stdout(opts.color);

    if args.table {
        listing::write_table(&mut stdout, &opts)?;
        return Ok(());
    }

    let bytes = match (args.file, args.hex) {
        (Some(path), _) => {
            let bytes = fs::read(&path)
                .with_context(|| format!("failed to read {}", path.as_os_str().to_string_lossy()))?;
            eprintln!("Loaded {} bytes from {}", bytes.len(), path.as_os_str().to_string_lossy());
            bytes
        }
        (None, Some(HexBytes(bytes))) => bytes,
        (None, None) => bail!("nothing to list, pass a FILE, --hex or --table"),
    };

    let window = util::window(&bytes, args.skip, args.count)?;
    opts.base_addr = args.base.unwrap_or(0).wrapping_add(args.skip as u16);

    eprintln!("Listing {} bytes at {:04X} for {}", window.len(), opts.base_addr, opts.cpu);
    listing::write_listing(&mut stdout, window, &opts)?;

    Ok(())
}
