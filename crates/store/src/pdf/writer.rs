//! PDF file structure: header, body objects, xref table, trailer.

use super::objects::{PdfDictionary, PdfObject};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

pub struct PdfWriter {
    buffer: Vec<u8>,
    /// Byte offset of each written object, indexed by object number.
    offsets: Vec<Option<usize>>,
    next_object: u32,
    compress: bool,
}

impl PdfWriter {
    pub fn new(compress: bool) -> Self {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(b"%PDF-1.4\n");
        // Binary marker comment so transports treat the file as binary.
        buffer.extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);
        Self {
            buffer,
            offsets: Vec::new(),
            next_object: 1,
            compress,
        }
    }

    pub fn compress(&self) -> bool {
        self.compress
    }

    /// Reserve an object number without writing it yet.
    pub fn allocate(&mut self) -> u32 {
        let num = self.next_object;
        self.next_object += 1;
        self.offsets.push(None);
        num
    }

    fn begin_object(&mut self, num: u32) {
        let slot = (num - 1) as usize;
        self.offsets[slot] = Some(self.buffer.len());
        self.buffer
            .extend_from_slice(format!("{} 0 obj\n", num).as_bytes());
    }

    fn end_object(&mut self) {
        self.buffer.extend_from_slice(b"\nendobj\n");
    }

    pub fn write_object(&mut self, num: u32, object: &PdfObject) {
        self.begin_object(num);
        object.serialize_into(&mut self.buffer);
        self.end_object();
    }

    /// Write a stream object. When the writer compresses and the data is not
    /// already encoded, the stream gets flate-compressed and a FlateDecode
    /// filter entry.
    pub fn write_stream(
        &mut self,
        num: u32,
        mut dict: PdfDictionary,
        data: &[u8],
        already_encoded: bool,
    ) -> std::io::Result<()> {
        let payload = if self.compress && !already_encoded {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(data)?;
            let compressed = encoder.finish()?;
            dict.insert("Filter", PdfObject::Name("FlateDecode"));
            compressed
        } else {
            data.to_vec()
        };
        dict.insert("Length", PdfObject::Integer(payload.len() as i64));

        self.begin_object(num);
        dict.serialize_into(&mut self.buffer);
        self.buffer.extend_from_slice(b"\nstream\n");
        self.buffer.extend_from_slice(&payload);
        self.buffer.extend_from_slice(b"\nendstream");
        self.end_object();
        Ok(())
    }

    /// Write the xref table and trailer, returning the finished file.
    pub fn finish(mut self, catalog: u32, info: u32) -> Vec<u8> {
        let xref_offset = self.buffer.len();
        let count = self.offsets.len() + 1;

        self.buffer
            .extend_from_slice(format!("xref\n0 {}\n", count).as_bytes());
        self.buffer.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            let offset = offset.unwrap_or(0);
            self.buffer
                .extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(count as i64));
        trailer.insert("Root", PdfObject::Reference(catalog));
        trailer.insert("Info", PdfObject::Reference(info));

        self.buffer.extend_from_slice(b"trailer\n");
        trailer.serialize_into(&mut self.buffer);
        self.buffer
            .extend_from_slice(format!("\nstartxref\n{}\n%%EOF\n", xref_offset).as_bytes());
        self.buffer
    }
}
