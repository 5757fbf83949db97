//! Property tests for opcode name resolution and byte listings.

use proptest::prelude::*;

use xtops::debug::{listing, opcode_map, options::Options, Cpu};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Every byte has a non-empty name.
    #[test]
    fn name_is_never_empty(op in any::<u8>()) {
        prop_assert!(!opcode_map::opcode_name(op).is_empty());
    }

    /// Table entries come back verbatim, everything else uses the fallback.
    #[test]
    fn name_is_entry_or_fallback(op in any::<u8>()) {
        let name = opcode_map::opcode_name(op);
        match opcode_map::lookup(op) {
            Some(m) => {
                prop_assert_eq!(name.as_ref(), m.as_str());
            }
            None => {
                let hex = name.strip_prefix("NO NAME (0x").and_then(|s| s.strip_suffix(')'));
                prop_assert!(hex.is_some(), "bad fallback {}", name);
                let hex = hex.unwrap();
                prop_assert_eq!(hex.len(), 2);
                prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
                prop_assert_eq!(u8::from_str_radix(hex, 16).unwrap(), op);
            }
        }
    }

    /// Same input, same output.
    #[test]
    fn resolution_is_deterministic(op in any::<u8>()) {
        prop_assert_eq!(opcode_map::opcode_name(op), opcode_map::opcode_name(op));
    }

    /// A listing has one line per byte and each line resolves its byte alone.
    #[test]
    fn listing_is_per_byte(bytes in prop::collection::vec(any::<u8>(), 0..64), base in any::<u16>()) {
        let opts = Options { base_addr: base, cpu: Cpu::I8086, ..Options::default() };
        let lines: Vec<_> = listing::listing(&bytes, &opts).collect();
        prop_assert_eq!(lines.len(), bytes.len());
        for (i, line) in lines.iter().enumerate() {
            prop_assert_eq!(line.byte, bytes[i]);
            prop_assert_eq!(line.addr, base.wrapping_add(i as u16));
            prop_assert_eq!(&line.name, &opcode_map::opcode_name(bytes[i]));
        }
    }
}
