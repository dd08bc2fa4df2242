//! Content stream builder.
//!
//! Emits the small set of operators the cover page needs: a text object
//! with font, matrix, and show-text operators, plus the save/transform/Do
//! sequence that places the logo XObject.

use super::objects::fmt_num;

#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn op(&mut self, line: String) {
        self.data.extend_from_slice(line.as_bytes());
        self.data.push(b'\n');
    }

    /// q
    pub fn save_state(&mut self) {
        self.op("q".to_string());
    }

    /// Q
    pub fn restore_state(&mut self) {
        self.op("Q".to_string());
    }

    /// cm
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.op(format!(
            "{} {} {} {} {} {} cm",
            fmt_num(a),
            fmt_num(b),
            fmt_num(c),
            fmt_num(d),
            fmt_num(e),
            fmt_num(f)
        ));
    }

    /// Do
    pub fn draw_xobject(&mut self, name: &str) {
        self.op(format!("/{} Do", name));
    }

    /// BT
    pub fn begin_text(&mut self) {
        self.op("BT".to_string());
    }

    /// ET
    pub fn end_text(&mut self) {
        self.op("ET".to_string());
    }

    /// Tf
    pub fn set_font(&mut self, resource: &str, size_pt: f64) {
        self.op(format!("/{} {} Tf", resource, fmt_num(size_pt)));
    }

    /// Tm - position the baseline origin.
    pub fn set_text_position(&mut self, x: f64, y: f64) {
        self.op(format!("1 0 0 1 {} {} Tm", fmt_num(x), fmt_num(y)));
    }

    /// Tj, with the text narrowed to WinAnsi single-byte codes.
    pub fn show_text(&mut self, text: &str) {
        self.data.push(b'(');
        for c in text.chars() {
            let byte = if (c as u32) < 256 { c as u32 as u8 } else { b'?' };
            match byte {
                b'(' | b')' | b'\\' => {
                    self.data.push(b'\\');
                    self.data.push(byte);
                }
                0x20..=0x7E => self.data.push(byte),
                _ => self
                    .data
                    .extend_from_slice(format!("\\{:03o}", byte).as_bytes()),
            }
        }
        self.data.extend_from_slice(b") Tj\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_text_object() {
        let mut content = ContentStream::new();
        content.begin_text();
        content.set_font("F2", 22.5);
        content.set_text_position(100.0, 742.0);
        content.show_text("CHE203L REPORT");
        content.end_text();

        let out = String::from_utf8(content.into_bytes()).unwrap();
        assert!(out.contains("BT"));
        assert!(out.contains("/F2 22.5 Tf"));
        assert!(out.contains("1 0 0 1 100 742 Tm"));
        assert!(out.contains("(CHE203L REPORT) Tj"));
        assert!(out.contains("ET"));
    }

    #[test]
    fn places_an_xobject_under_saved_state() {
        let mut content = ContentStream::new();
        content.save_state();
        content.transform(198.7, 0.0, 0.0, 240.4, 198.3, 350.0);
        content.draw_xobject("Im1");
        content.restore_state();

        let out = String::from_utf8(content.into_bytes()).unwrap();
        assert!(out.starts_with("q\n"));
        assert!(out.contains("198.7 0 0 240.4 198.3 350 cm"));
        assert!(out.contains("/Im1 Do"));
        assert!(out.trim_end().ends_with('Q'));
    }

    #[test]
    fn escapes_text_specials() {
        let mut content = ContentStream::new();
        content.show_text(r"Md Istiak Hossain (MIO)");
        let out = String::from_utf8(content.into_bytes()).unwrap();
        assert!(out.contains(r"(Md Istiak Hossain \(MIO\)) Tj"));
    }
}
