use anyhow::{bail, Context, Result};

/// Parses "90 c8 0f", "90C80F" or "0x90,0xC8" into bytes.
pub fn parse_hex_bytes(s: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for token in s.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
        let digits = strip_hex_prefix(token);
        if digits.len() % 2 != 0 {
            bail!("odd number of hex digits in {token:?}")
        }
        for i in (0..digits.len()).step_by(2) {
            let pair = digits.get(i..i + 2).context("non-ascii hex digit")?;
            let byte = u8::from_str_radix(pair, 16)
                .with_context(|| format!("invalid hex byte {pair:?} in {token:?}"))?;
            bytes.push(byte);
        }
    }
    if bytes.is_empty() {
        bail!("no bytes given")
    }
    Ok(bytes)
}

pub fn parse_addr(s: &str) -> Result<u16> {
    u16::from_str_radix(strip_hex_prefix(s.trim()), 16)
        .with_context(|| format!("invalid address {s:?}, expected up to 4 hex digits"))
}

/// `count` bytes of `bytes` starting at `skip`, clamped to the end.
pub fn window(bytes: &[u8], skip: usize, count: Option<usize>) -> Result<&[u8]> {
    if skip > bytes.len() {
        bail!("skip {skip} is past the end of the input ({} bytes)", bytes.len())
    }
    let end = match count {
        Some(n) => skip.saturating_add(n).min(bytes.len()),
        None => bytes.len(),
    };
    Ok(&bytes[skip..end])
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}
