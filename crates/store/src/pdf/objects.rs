//! Minimal PDF object model.
//!
//! Only the object kinds this exporter emits. Generation numbers are
//! always zero for freshly written files, so references carry just the
//! object number.

use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    Name(&'static str),
    /// Literal string, written in parentheses with escaping.
    Literal(Vec<u8>),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    Reference(u32),
}

impl PdfObject {
    pub fn string(s: &str) -> Self {
        PdfObject::Literal(s.as_bytes().to_vec())
    }

    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        match self {
            PdfObject::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
            PdfObject::Real(n) => out.extend_from_slice(fmt_num(*n).as_bytes()),
            PdfObject::Name(name) => {
                out.push(b'/');
                out.extend_from_slice(name.as_bytes());
            }
            PdfObject::Literal(data) => {
                out.push(b'(');
                for &byte in data {
                    match byte {
                        b'(' | b')' | b'\\' => {
                            out.push(b'\\');
                            out.push(byte);
                        }
                        0x20..=0x7E => out.push(byte),
                        _ => out.extend_from_slice(format!("\\{:03o}", byte).as_bytes()),
                    }
                }
                out.push(b')');
            }
            PdfObject::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.serialize_into(out);
                }
                out.push(b']');
            }
            PdfObject::Dictionary(dict) => dict.serialize_into(out),
            PdfObject::Reference(num) => {
                out.extend_from_slice(format!("{} 0 R", num).as_bytes());
            }
        }
    }
}

/// PDF dictionary with deterministically ordered keys.
#[derive(Debug, Clone, Default)]
pub struct PdfDictionary {
    entries: BTreeMap<&'static str, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_name: &'static str) -> Self {
        self.insert("Type", PdfObject::Name(type_name));
        self
    }

    pub fn insert(&mut self, key: &'static str, value: PdfObject) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            out.push(b'/');
            out.extend_from_slice(key.as_bytes());
            out.push(b' ');
            value.serialize_into(out);
        }
        out.extend_from_slice(b" >>");
    }
}

/// Format a number the compact way PDF expects: no exponent, no trailing
/// fraction zeros.
pub(crate) fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        let s = format!("{:.4}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized(obj: &PdfObject) -> String {
        let mut out = Vec::new();
        obj.serialize_into(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn serializes_scalars() {
        assert_eq!(serialized(&PdfObject::Integer(42)), "42");
        assert_eq!(serialized(&PdfObject::Real(3.5)), "3.5");
        assert_eq!(serialized(&PdfObject::Real(72.0)), "72");
        assert_eq!(serialized(&PdfObject::Name("Page")), "/Page");
        assert_eq!(serialized(&PdfObject::Reference(7)), "7 0 R");
    }

    #[test]
    fn escapes_literal_strings() {
        assert_eq!(serialized(&PdfObject::string("plain")), "(plain)");
        assert_eq!(
            serialized(&PdfObject::string(r"(MIO) \ done")),
            r"(\(MIO\) \\ done)"
        );
    }

    #[test]
    fn serializes_arrays_and_dictionaries() {
        let arr = PdfObject::Array(vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(595.28),
        ]);
        assert_eq!(serialized(&arr), "[0 0 595.28]");

        let mut dict = PdfDictionary::new().with_type("Catalog");
        dict.insert("Pages", PdfObject::Reference(2));
        let out = serialized(&PdfObject::Dictionary(dict));
        assert!(out.contains("/Type /Catalog"));
        assert!(out.contains("/Pages 2 0 R"));
    }

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(1.25), "1.25");
        assert_eq!(fmt_num(1.2500), "1.25");
        assert_eq!(fmt_num(-3.0), "-3");
    }
}
