//! Standard-14 fonts used by the text layer

use super::objects::{PdfDictionary, PdfObject};

/// Fonts every PDF viewer has built in; nothing is embedded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    pub fn for_weight(bold: bool) -> Self {
        if bold {
            StandardFont::HelveticaBold
        } else {
            StandardFont::Helvetica
        }
    }

    /// BaseFont name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Key in a page's /Font resource dictionary
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }

    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new().with_type("Font");
        dict.insert("Subtype", PdfObject::name("Type1"));
        dict.insert("BaseFont", PdfObject::name(self.pdf_name()));
        dict.insert("Encoding", PdfObject::name("WinAnsiEncoding"));
        dict
    }
}

/// Encode text as WinAnsi bytes; characters outside the code page become `?`
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_dictionary() {
        let dict = StandardFont::HelveticaBold.to_dictionary();
        assert_eq!(dict.get("BaseFont"), Some(&PdfObject::name("Helvetica-Bold")));
        assert_eq!(dict.get("Encoding"), Some(&PdfObject::name("WinAnsiEncoding")));
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("Hi"), b"Hi".to_vec());
        assert_eq!(encode_win_ansi("• café"), vec![0x95, b' ', b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("★"), vec![b'?']);
    }
}
