use std::{borrow::Cow, fmt, io::Write};

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use super::{mnemonic::{Cpu, Mnemonic}, opcode_map::{self, MnemonicTable, TABLE}, options::Options};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Plain,
    Undocumented,
    Group,
    /// Assigned, but only on a newer CPU than the target.
    Unsupported,
    Unassigned,
}

impl Kind {
    pub fn of(entry: Option<Mnemonic>, cpu: Cpu) -> Self {
        match entry {
            None => Kind::Unassigned,
            Some(m) if m.min_cpu() > cpu => Kind::Unsupported,
            Some(m) if m.is_undocumented() => Kind::Undocumented,
            Some(m) if m.is_group() => Kind::Group,
            Some(_) => Kind::Plain,
        }
    }

    fn color_spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Kind::Plain => {}
            Kind::Undocumented => { spec.set_fg(Some(Color::Red)); }
            Kind::Group => { spec.set_fg(Some(Color::Yellow)); }
            Kind::Unsupported => { spec.set_fg(Some(Color::Magenta)); }
            Kind::Unassigned => { spec.set_fg(Some(Color::Black)).set_intense(true); }
        }
        spec
    }
}

/// One byte of a listing: `0100  C8  ENTER (80186)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    pub addr: u16,
    pub byte: u8,
    pub name: Cow<'static, str>,
    pub kind: Kind,
}

impl ListingLine {
    pub fn new(addr: u16, byte: u8, cpu: Cpu) -> Self {
        ListingLine {
            addr,
            byte,
            name: opcode_map::opcode_name(byte),
            kind: Kind::of(opcode_map::lookup(byte), cpu),
        }
    }
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ListingLine { addr, byte, name, .. } = self;
        f.write_fmt(format_args!("{addr:04X}  {byte:02X}  {name}"))
    }
}

/// Resolves every byte on its own, addresses wrap at 0xFFFF.
pub fn listing<'a>(bytes: &'a [u8], opts: &Options) -> impl Iterator<Item = ListingLine> + 'a {
    let base = opts.base_addr;
    let cpu = opts.cpu;
    bytes.iter().enumerate()
        .map(move |(i, &byte)| ListingLine::new(base.wrapping_add(i as u16), byte, cpu))
}

pub fn write_listing<W: WriteColor>(out: &mut W, bytes: &[u8], opts: &Options) -> Result<()> {
    for line in listing(bytes, opts) {
        write!(out, "{:04X}  {:02X}  ", line.addr, line.byte)?;
        write_name(out, &line, opts.cpu)?;
    }
    out.flush()?;
    Ok(())
}

/// Dumps all 256 opcodes followed by a coverage summary.
pub fn write_table<W: WriteColor>(out: &mut W, opts: &Options) -> Result<()> {
    for byte in 0..=u8::MAX {
        let line = ListingLine::new(byte as u16, byte, opts.cpu);
        write!(out, "0x{byte:02X}  ")?;
        write_name(out, &line, opts.cpu)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", TableStats::collect(&TABLE))?;
    out.flush()?;
    Ok(())
}

fn write_name<W: WriteColor>(out: &mut W, line: &ListingLine, cpu: Cpu) -> Result<()> {
    out.set_color(&line.kind.color_spec())?;
    write!(out, "{}", line.name)?;
    out.reset()?;
    if line.kind == Kind::Unsupported {
        write!(out, "  ; not on {cpu}")?;
    }
    writeln!(out)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStats {
    pub assigned: usize,
    pub unassigned: usize,
    pub undocumented: usize,
    pub grouped: usize,
    pub needs_80186: usize,
}

impl TableStats {
    pub fn collect(table: &MnemonicTable) -> Self {
        let mut stats = TableStats::default();
        for (_, m) in table.iter() {
            stats.assigned += 1;
            stats.undocumented += m.is_undocumented() as usize;
            stats.grouped += m.is_group() as usize;
            stats.needs_80186 += (m.min_cpu() == Cpu::I80186) as usize;
        }
        stats.unassigned = 256 - stats.assigned;
        stats
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "{} assigned, {} unassigned, {} undocumented, {} grouped, {} need 80186",
            self.assigned, self.unassigned, self.undocumented, self.grouped, self.needs_80186
        ))
    }
}
