//! PDF object model
//!
//! The handful of object types a PDF file is built from, each able to
//! encode itself in PDF syntax.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Literal string; bytes are written escaped
    String(Vec<u8>),
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    Stream(PdfStream),
    /// Indirect reference to an object number (generation is always 0)
    Reference(u32),
}

impl PdfObject {
    pub fn name(s: impl Into<String>) -> Self {
        PdfObject::Name(s.into())
    }

    pub fn text(s: &str) -> Self {
        PdfObject::String(s.as_bytes().to_vec())
    }

    /// `[0 0 w h]` rectangle array
    pub fn rect(width: f64, height: f64) -> Self {
        PdfObject::Array(vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(width),
            PdfObject::Real(height),
        ])
    }
}

impl From<i64> for PdfObject {
    fn from(n: i64) -> Self {
        PdfObject::Integer(n)
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(dict: PdfDictionary) -> Self {
        PdfObject::Dictionary(dict)
    }
}

/// Dictionary with keys kept in sorted order so output is deterministic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_name: &str) -> Self {
        self.insert("Type", PdfObject::name(type_name));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
    /// Set once a filter has been applied to `data`
    pub compressed: bool,
}

impl PdfStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
            compressed: false,
        }
    }

    pub fn with_dict(mut self, dict: PdfDictionary) -> Self {
        for (key, value) in dict.entries {
            self.dict.insert(key, value);
        }
        self
    }
}

impl PdfObject {
    /// PDF syntax for this object
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        match self {
            PdfObject::Null => out.extend_from_slice(b"null"),
            PdfObject::Boolean(true) => out.extend_from_slice(b"true"),
            PdfObject::Boolean(false) => out.extend_from_slice(b"false"),
            PdfObject::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
            PdfObject::Real(n) => out.extend_from_slice(format_real(*n).as_bytes()),
            PdfObject::String(bytes) => encode_literal(bytes, out),
            PdfObject::Name(name) => encode_name(name, out),
            PdfObject::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.encode(out);
                }
                out.push(b']');
            }
            PdfObject::Dictionary(dict) => dict.encode(out),
            PdfObject::Stream(stream) => {
                stream.dict.encode(out);
                out.extend_from_slice(b"\nstream\n");
                out.extend_from_slice(&stream.data);
                out.extend_from_slice(b"\nendstream");
            }
            PdfObject::Reference(num) => out.extend_from_slice(format!("{} 0 R", num).as_bytes()),
        }
    }
}

impl PdfDictionary {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            encode_name(key, out);
            out.push(b' ');
            value.encode(out);
        }
        out.extend_from_slice(b" >>");
    }
}

fn encode_literal(bytes: &[u8], out: &mut Vec<u8>) {
    out.push(b'(');
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => out.extend_from_slice(&[b'\\', byte]),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            0x20..=0x7E => out.push(byte),
            _ => out.extend_from_slice(format!("\\{:03o}", byte).as_bytes()),
        }
    }
    out.push(b')');
}

/// Names escape delimiters and anything outside printable ASCII as `#XX`
fn encode_name(name: &str, out: &mut Vec<u8>) {
    out.push(b'/');
    for byte in name.bytes() {
        let delimiter = b"#()<>[]{}/%".contains(&byte);
        if (0x21..=0x7E).contains(&byte) && !delimiter {
            out.push(byte);
        } else {
            out.extend_from_slice(format!("#{:02X}", byte).as_bytes());
        }
    }
}

/// Shortest decimal form with at most four fractional digits
pub(crate) fn format_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        let s = format!("{:.4}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(obj: &PdfObject) -> String {
        String::from_utf8(obj.to_bytes()).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(serialize(&PdfObject::Null), "null");
        assert_eq!(serialize(&PdfObject::Boolean(true)), "true");
        assert_eq!(serialize(&PdfObject::Integer(-7)), "-7");
        assert_eq!(serialize(&PdfObject::Real(1920.0)), "1920");
        assert_eq!(serialize(&PdfObject::Real(0.25)), "0.25");
        assert_eq!(serialize(&PdfObject::Reference(4)), "4 0 R");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(serialize(&PdfObject::text("a (b) \\c")), "(a \\(b\\) \\\\c)");
        assert_eq!(serialize(&PdfObject::String(vec![0x95])), "(\\225)");
    }

    #[test]
    fn test_name_escapes_delimiters() {
        assert_eq!(serialize(&PdfObject::name("Type")), "/Type");
        assert_eq!(serialize(&PdfObject::name("A B")), "/A#20B");
    }

    #[test]
    fn test_dictionary_sorted() {
        let mut dict = PdfDictionary::new().with_type("Page");
        dict.insert("MediaBox", PdfObject::rect(1920.0, 1080.0));
        assert_eq!(
            serialize(&dict.into()),
            "<< /MediaBox [0 0 1920 1080] /Type /Page >>"
        );
    }

    proptest::proptest! {
        #[test]
        fn real_numbers_stay_in_plain_notation(n in -100_000.0f64..100_000.0) {
            let text = format_real(n);
            proptest::prop_assert!(!text.contains('e'));
            let back: f64 = text.parse().unwrap();
            proptest::prop_assert!((back - n).abs() < 0.0001);
        }
    }
}
