use anyhow::Result;
use termcolor::Buffer;
use std::collections::HashSet;

use crate::{clapx, util};
use crate::debug::{
    listing::{self, Kind, ListingLine, TableStats},
    opcode_map::{self, MnemonicTable, ENTRIES, TABLE},
    options::Options,
    Cpu, Mnemonic,
};

const UNASSIGNED: [u8; 13] = [0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x6A, 0x6C, 0x6D, 0x6E, 0x6F, 0xF1];

fn entry(opcode: u8) -> Mnemonic {
    opcode_map::lookup(opcode).unwrap()
}

#[test]
fn resolves_known_opcodes() {
    assert_eq!(opcode_map::opcode_name(0x00), "ADD r/m8,r8");
    assert_eq!(opcode_map::opcode_name(0x90), "NOP");
    assert_eq!(opcode_map::opcode_name(0xC8), "ENTER (80186)");
    assert_eq!(opcode_map::opcode_name(0x0F), "*POP CS");
    assert_eq!(opcode_map::opcode_name(0xFF), "_MISC r/m16");
}

#[test]
fn unassigned_opcodes_fall_back() {
    assert_eq!(opcode_map::opcode_name(0xF1), "NO NAME (0xF1)");
    assert_eq!(opcode_map::opcode_name(0x6A), "NO NAME (0x6A)");
    for op in UNASSIGNED {
        assert!(opcode_map::lookup(op).is_none(), "0x{op:02X} should be unassigned");
        assert_eq!(opcode_map::opcode_name(op), format!("NO NAME (0x{op:02X})"));
    }
}

#[test]
fn table_matches_entries() {
    let mut seen = HashSet::new();
    for &(op, name) in ENTRIES {
        assert!(seen.insert(op), "0x{op:02X} listed twice");
        assert_eq!(opcode_map::opcode_name(op), name);
    }
    assert_eq!(TABLE.len(), 243);
    assert_eq!(seen.len() + UNASSIGNED.len(), 256);
}

#[test]
fn every_byte_resolves() {
    for op in 0..=u8::MAX {
        assert!(!opcode_map::opcode_name(op).is_empty());
    }
}

#[test]
fn construction_is_idempotent() {
    let a = MnemonicTable::new();
    let b = MnemonicTable::default();
    assert_eq!(a, b);
    assert_eq!(a, TABLE);
    assert!(a.iter().eq(b.iter()));
}

#[test]
fn iter_is_in_opcode_order() {
    let ops: Vec<u8> = TABLE.iter().map(|(op, _)| op).collect();
    assert_eq!(ops.len(), TABLE.len());
    assert!(ops.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ops.first(), Some(&0x00));
    assert_eq!(ops.last(), Some(&0xFF));
}

#[test]
fn concurrent_callers_agree() {
    let expected: Vec<String> = (0..=u8::MAX).map(|op| opcode_map::opcode_name(op).into_owned()).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| {
            (0..=u8::MAX).map(|op| opcode_map::opcode_name(op).into_owned()).collect::<Vec<_>>()
        })).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn mnemonic_annotations() {
    let pop_cs = entry(0x0F);
    assert!(pop_cs.is_undocumented());
    assert!(!pop_cs.is_group());
    assert_eq!(pop_cs.name(), "POP");
    assert_eq!(pop_cs.operands(), Some("CS"));
    assert_eq!(pop_cs.as_str(), "*POP CS");

    let alu = entry(0x82);
    assert!(alu.is_undocumented());
    assert!(alu.is_group());
    assert_eq!(alu.group(), Some("ALU1"));
    assert_eq!(alu.operands(), Some("r/m8,d8"));

    assert_eq!(entry(0xD0).group(), Some("ROT"));
    assert_eq!(entry(0xFE).group(), Some("MISC"));
    assert_eq!(entry(0x00).group(), None);

    let enter = entry(0xC8);
    assert_eq!(enter.min_cpu(), Cpu::I80186);
    assert_eq!(enter.name(), "ENTER");
    assert_eq!(enter.operands(), None);
    assert_eq!(enter.to_string(), "ENTER (80186)");

    let imul = entry(0x69);
    assert_eq!(imul.min_cpu(), Cpu::I80186);
    assert_eq!(imul.operands(), Some("r/m16,d8"));

    // inner `*` is an operand note, not the undocumented marker
    let aam = entry(0xD4);
    assert!(!aam.is_undocumented());
    assert_eq!(aam.operands(), Some("*d8"));
    assert_eq!(aam.min_cpu(), Cpu::I8086);
}

#[test]
fn table_stats() {
    let stats = TableStats::collect(&TABLE);
    assert_eq!(stats, TableStats {
        assigned: 243,
        unassigned: 13,
        undocumented: 3,
        grouped: 17,
        needs_80186: 8,
    });
    assert_eq!(stats.to_string(), "243 assigned, 13 unassigned, 3 undocumented, 17 grouped, 8 need 80186");
}

#[test]
fn cpu_parsing() -> Result<()> {
    assert_eq!("8088".parse::<Cpu>()?, Cpu::I8086);
    assert_eq!("80186".parse::<Cpu>()?, Cpu::I80186);
    assert!("80286".parse::<Cpu>().is_err());
    assert!(Cpu::I8086 < Cpu::I80186);
    assert_eq!(clapx::cpu_value_parser("8086".to_owned())?, Cpu::I8086);
    Ok(())
}

#[test]
fn listing_line_kinds() {
    assert_eq!(ListingLine::new(0, 0x90, Cpu::I8086).kind, Kind::Plain);
    assert_eq!(ListingLine::new(0, 0xD6, Cpu::I8086).kind, Kind::Undocumented);
    assert_eq!(ListingLine::new(0, 0x80, Cpu::I8086).kind, Kind::Group);
    assert_eq!(ListingLine::new(0, 0xC8, Cpu::I8086).kind, Kind::Unsupported);
    assert_eq!(ListingLine::new(0, 0xC8, Cpu::I80186).kind, Kind::Plain);
    assert_eq!(ListingLine::new(0, 0xF1, Cpu::I80186).kind, Kind::Unassigned);
}

#[test]
fn listing_addresses_wrap() {
    let opts = Options { base_addr: 0xFFFF, ..Options::default() };
    let lines: Vec<String> = listing::listing(&[0x90, 0xC3], &opts).map(|l| l.to_string()).collect();
    assert_eq!(lines, vec![
        "FFFF  90  NOP".to_owned(),
        "0000  C3  RET".to_owned(),
    ]);
}

#[test]
fn write_listing_plain() -> Result<()> {
    let opts = Options { base_addr: 0x100, cpu: Cpu::I8086, ..Options::default() };
    let mut buf = Buffer::no_color();
    listing::write_listing(&mut buf, &[0x00, 0xC8, 0xF1], &opts)?;
    let text = String::from_utf8(buf.into_inner())?;
    assert_eq!(text, "\
0100  00  ADD r/m8,r8
0101  C8  ENTER (80186)  ; not on 8086
0102  F1  NO NAME (0xF1)
");
    Ok(())
}

#[test]
fn write_listing_colored() -> Result<()> {
    let mut buf = Buffer::ansi();
    listing::write_listing(&mut buf, &[0x0F], &Options::default())?;
    let text = String::from_utf8(buf.into_inner())?;
    assert!(text.contains("\x1b["));
    assert!(text.contains("*POP CS"));
    Ok(())
}

#[test]
fn write_table_dumps_all_opcodes() -> Result<()> {
    let mut buf = Buffer::no_color();
    listing::write_table(&mut buf, &Options::default())?;
    let text = String::from_utf8(buf.into_inner())?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 258);
    assert_eq!(lines[0], "0x00  ADD r/m8,r8");
    assert_eq!(lines[0xF1], "0xF1  NO NAME (0xF1)");
    assert_eq!(lines[255], "0xFF  _MISC r/m16");
    assert_eq!(lines[256], "");
    assert!(lines[257].starts_with("243 assigned"));
    Ok(())
}

#[test]
fn hex_byte_parsing() -> Result<()> {
    assert_eq!(util::parse_hex_bytes("90 c8 0f")?, vec![0x90, 0xC8, 0x0F]);
    assert_eq!(util::parse_hex_bytes("90C80F")?, vec![0x90, 0xC8, 0x0F]);
    assert_eq!(util::parse_hex_bytes("0x90,0xC8")?, vec![0x90, 0xC8]);
    assert!(util::parse_hex_bytes("9").is_err());
    assert!(util::parse_hex_bytes("zz").is_err());
    assert!(util::parse_hex_bytes("  ").is_err());
    assert_eq!(clapx::hex_bytes_parser("CC")?, clapx::HexBytes(vec![0xCC]));
    Ok(())
}

#[test]
fn addr_parsing() -> Result<()> {
    assert_eq!(util::parse_addr("0x100")?, 0x100);
    assert_eq!(util::parse_addr("FFFF")?, 0xFFFF);
    assert!(util::parse_addr("10000").is_err());
    Ok(())
}

#[test]
fn input_window() -> Result<()> {
    let bytes = [1u8, 2, 3, 4];
    assert_eq!(util::window(&bytes, 1, Some(2))?, &[2, 3]);
    assert_eq!(util::window(&bytes, 2, None)?, &[3, 4]);
    assert_eq!(util::window(&bytes, 3, Some(10))?, &[4]);
    assert_eq!(util::window(&bytes, 4, None)?, &[] as &[u8]);
    assert!(util::window(&bytes, 5, None).is_err());
    Ok(())
}
