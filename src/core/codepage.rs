//! CP437 Code Page
//!
//! Maps the upper half of the IBM PC extended character set (bytes 128-255)
//! to Unicode so legacy text can be displayed. The lower half is ASCII and
//! passes through unchanged.

/// Glyphs for bytes 0x80-0xFF, indexed by `byte - 0x80`
pub static CP437_HIGH: [char; 128] = [
    '\u{00C7}', '\u{00FC}', '\u{00E9}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E5}', '\u{00E7}', // 0x80
    '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00EF}', '\u{00EE}', '\u{00EC}', '\u{00C4}', '\u{00C5}', // 0x88
    '\u{00C9}', '\u{00E6}', '\u{00C6}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00FB}', '\u{00F9}', // 0x90
    '\u{00FF}', '\u{00D6}', '\u{00DC}', '\u{00A2}', '\u{00A3}', '\u{00A5}', '\u{20A7}', '\u{0192}', // 0x98
    '\u{00E1}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00F1}', '\u{00D1}', '\u{00AA}', '\u{00BA}', // 0xA0
    '\u{00BF}', '\u{2310}', '\u{00AC}', '\u{00BD}', '\u{00BC}', '\u{00A1}', '\u{00AB}', '\u{00BB}', // 0xA8
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{2561}', '\u{2562}', '\u{2556}', // 0xB0
    '\u{2555}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{255C}', '\u{255B}', '\u{2510}', // 0xB8
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{255E}', '\u{255F}', // 0xC0
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{2567}', // 0xC8
    '\u{2568}', '\u{2564}', '\u{2565}', '\u{2559}', '\u{2558}', '\u{2552}', '\u{2553}', '\u{256B}', // 0xD0
    '\u{256A}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{258C}', '\u{2590}', '\u{2580}', // 0xD8
    '\u{03B1}', '\u{00DF}', '\u{0393}', '\u{03C0}', '\u{03A3}', '\u{03C3}', '\u{00B5}', '\u{03C4}', // 0xE0
    '\u{03A6}', '\u{0398}', '\u{03A9}', '\u{03B4}', '\u{221E}', '\u{03C6}', '\u{03B5}', '\u{2229}', // 0xE8
    '\u{2261}', '\u{00B1}', '\u{2265}', '\u{2264}', '\u{2320}', '\u{2321}', '\u{00F7}', '\u{2248}', // 0xF0
    '\u{00B0}', '\u{2219}', '\u{00B7}', '\u{221A}', '\u{207F}', '\u{00B2}', '\u{25A0}', '\u{00A0}', // 0xF8
];

/// Translate a single byte to its display glyph
pub fn ibm_extend(byte: u8) -> char {
    if byte < 0x80 {
        return char::from(byte);
    }
    CP437_HIGH[usize::from(byte - 0x80)]
}

/// Translate a whole buffer
pub fn ibm_extend_str(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| ibm_extend(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(ibm_extend(b'A'), 'A');
        assert_eq!(ibm_extend(0), '\0');
        assert_eq!(ibm_extend(0x7F), '\u{7F}');
    }

    #[test]
    fn test_table_endpoints() {
        assert_eq!(ibm_extend(0x80), 'Ç');
        assert_eq!(ibm_extend(0xFE), '■');
        assert_eq!(ibm_extend(0xFF), '\u{A0}'); // No-break space
    }

    #[test]
    fn test_box_drawing() {
        assert_eq!(ibm_extend(0xB3), '│');
        assert_eq!(ibm_extend(0xC4), '─');
        assert_eq!(ibm_extend(0xC9), '╔');
        assert_eq!(ibm_extend(0xBC), '╝');
        assert_eq!(ibm_extend(0xDB), '█');
        assert_eq!(ibm_extend(0xB0), '░');
    }

    #[test]
    fn test_greek_and_math() {
        assert_eq!(ibm_extend(0xE0), 'α');
        assert_eq!(ibm_extend(0xE3), 'π');
        assert_eq!(ibm_extend(0xEC), '∞');
        assert_eq!(ibm_extend(0xFB), '√');
    }

    #[test]
    fn test_extend_str() {
        assert_eq!(ibm_extend_str(&[b'O', b'K', b' ', 0xFB]), "OK √");
        assert_eq!(ibm_extend_str(&[0xDA, 0xC4, 0xBF]), "┌─┐");
        assert_eq!(ibm_extend_str(&[]), "");
    }
}
