use std::{fmt, str::FromStr};

/// CPU generations the mnemonic table distinguishes. Ordered, so an entry
/// is valid on `cpu` when `entry.min_cpu() <= cpu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cpu {
    I8086,
    I80186,
}

impl Default for Cpu {
    fn default() -> Self {
        Cpu::I80186
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cpu::I8086 => f.write_str("8086"),
            Cpu::I80186 => f.write_str("80186"),
        }
    }
}

impl FromStr for Cpu {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "8086" | "8088" => Ok(Cpu::I8086),
            "80186" | "80188" => Ok(Cpu::I80186),
            other => anyhow::bail!("unknown cpu {other:?}"),
        }
    }
}

/// One mnemonic table entry, e.g. `ADD r/m8,r8`.
///
/// The string is kept verbatim. The query methods only read the
/// annotations, they never rewrite the text:
///
/// * a leading `*` marks an undocumented encoding (`*POP CS`),
/// * a leading `_` on the name marks a grouped opcode whose real
///   mnemonic lives in the ModRM reg field (`_ALU1 r/m8,d8`),
/// * a trailing `(80186)` names the first CPU the opcode exists on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mnemonic(&'static str);

impl Mnemonic {
    pub(crate) const fn new(text: &'static str) -> Self {
        Mnemonic(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_undocumented(&self) -> bool {
        self.0.starts_with('*')
    }

    pub fn is_group(&self) -> bool {
        self.body().starts_with('_')
    }

    /// Group placeholder name without the `_` marker (`ALU1`, `ROT`, `MISC`).
    pub fn group(&self) -> Option<&'static str> {
        self.is_group().then(|| self.name())
    }

    pub fn min_cpu(&self) -> Cpu {
        self.cpu_annotation().map(|(_, cpu)| cpu).unwrap_or(Cpu::I8086)
    }

    /// Instruction name with the `*` and `_` markers stripped.
    pub fn name(&self) -> &'static str {
        let (name, _) = self.split();
        name.trim_start_matches('_')
    }

    pub fn operands(&self) -> Option<&'static str> {
        self.split().1
    }

    fn body(&self) -> &'static str {
        self.0.strip_prefix('*').unwrap_or(self.0)
    }

    // ("ENTER", I80186) for "ENTER (80186)"
    fn cpu_annotation(&self) -> Option<(&'static str, Cpu)> {
        let body = self.body();
        let inner = body.strip_suffix(')')?;
        let (rest, cpu) = inner.rsplit_once(" (")?;
        let cpu = cpu.parse().ok()?;
        Some((rest, cpu))
    }

    fn split(&self) -> (&'static str, Option<&'static str>) {
        let text = self.cpu_annotation().map(|(rest, _)| rest).unwrap_or_else(|| self.body());
        match text.split_once(' ') {
            Some((name, operands)) => (name, Some(operands)),
            None => (text, None),
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for Mnemonic {
    fn as_ref(&self) -> &str {
        self.0
    }
}
