use std::collections::HashMap;
use std::sync::LazyLock;

/// GSM 03.38 default alphabet, one septet each. The escape slot (0x1B) is not a character.
pub(crate) const GSM7_BASIC: &str = "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§¿abcdefghijklmnopqrstuvwxyzäöñüà";

/// GSM 03.38 extension table, escape septet plus one. Must match the billing backend's table.
pub(crate) const GSM7_EXTENSION: &str = "^{}\\[~]|€";

/// Transport class of a single Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Member of the GSM-7 default alphabet (1 septet).
    BasicGsm7,
    /// Member of the GSM-7 extension table (escape + char, 2 septets).
    ExtendedGsm7,
    /// Not representable in GSM-7; forces UCS-2 for the whole message.
    NonGsm7,
}

impl CharClass {
    /// Septets consumed in a GSM-7 message, `None` when the character cannot be sent as GSM-7.
    pub const fn septets(self) -> Option<usize> {
        match self {
            CharClass::BasicGsm7 => Some(1),
            CharClass::ExtendedGsm7 => Some(2),
            CharClass::NonGsm7 => None,
        }
    }
}

struct CharClassTable {
    ascii: [CharClass; 128],
    wide: HashMap<char, CharClass>,
}

static TABLE: LazyLock<CharClassTable> = LazyLock::new(CharClassTable::build);

impl CharClassTable {
    fn build() -> Self {
        let mut table = Self {
            ascii: [CharClass::NonGsm7; 128],
            wide: HashMap::new(),
        };
        for ch in GSM7_BASIC.chars() {
            table.insert(ch, CharClass::BasicGsm7);
        }
        for ch in GSM7_EXTENSION.chars() {
            table.insert(ch, CharClass::ExtendedGsm7);
        }
        table
    }

    fn insert(&mut self, ch: char, class: CharClass) {
        if ch.is_ascii() {
            self.ascii[ch as usize] = class;
        } else {
            self.wide.insert(ch, class);
        }
    }

    fn get(&self, ch: char) -> CharClass {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            self.wide.get(&ch).copied().unwrap_or(CharClass::NonGsm7)
        }
    }
}

/// Classify one Unicode scalar value against the GSM-7 tables.
pub fn classify(ch: char) -> CharClass {
    TABLE.get(ch)
}
