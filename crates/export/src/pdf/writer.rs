//! PDF file writer
//!
//! Handles object numbering, the file body, optional Flate compression of
//! streams, and the cross-reference table and trailer.

use super::document::{create_catalog, create_pages, DocumentInfo, PdfPage, PAGE_IMAGE};
use super::fonts::StandardFont;
use super::objects::{PdfDictionary, PdfObject, PdfStream};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Compression error: {0}")]
    Compression(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

const PDF_VERSION: &str = "1.4";

/// Low-level writer: tracks byte offsets of every indirect object
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// (object number, byte offset)
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.write_str(&format!("%PDF-{}\n", PDF_VERSION))?;
        // Binary marker so transfer tools treat the file as binary.
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    pub fn write_object(&mut self, obj_num: u32, object: &PdfObject) -> Result<()> {
        self.offsets.push((obj_num, self.position));
        self.write_str(&format!("{} 0 obj\n", obj_num))?;
        self.write_bytes(&object.to_bytes())?;
        self.write_str("\nendobj\n")
    }

    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress && !stream.compressed {
            stream = compress_stream(stream)?;
        }
        stream
            .dict
            .insert("Length", PdfObject::Integer(stream.data.len() as i64));
        self.write_object(obj_num, &PdfObject::Stream(stream))
    }

    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: u32) -> Result<()> {
        let xref_offset = self.position;
        let mut offsets = std::mem::take(&mut self.offsets);
        offsets.sort_by_key(|(num, _)| *num);

        self.write_str(&format!("xref\n0 {}\n", self.next_obj_num))?;
        self.write_str("0000000000 65535 f \n")?;
        let mut expected = 1u32;
        for (num, offset) in &offsets {
            while expected < *num {
                self.write_str("0000000000 65535 f \n")?;
                expected += 1;
            }
            self.write_str(&format!("{:010} 00000 n \n", offset))?;
            expected = num + 1;
        }

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(self.next_obj_num as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref));
        trailer.insert("Info", PdfObject::Reference(info_ref));
        self.write_str("trailer\n")?;
        self.write_bytes(&PdfObject::from(trailer).to_bytes())?;
        self.write_str(&format!("\nstartxref\n{}\n%%EOF\n", xref_offset))
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn compress_stream(mut stream: PdfStream) -> Result<PdfStream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&stream.data)
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.data = encoder
        .finish()
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.compressed = true;
    stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
    Ok(stream)
}

/// Writes a whole document made of image pages
pub struct PdfDocumentWriter {
    info: DocumentInfo,
    compress: bool,
}

impl PdfDocumentWriter {
    pub fn new(info: DocumentInfo) -> Self {
        Self {
            info,
            compress: true,
        }
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn write<W: Write>(&self, pages: &[PdfPage], writer: W) -> Result<()> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("No pages to export".to_string()));
        }
        if let Some(index) = pages.iter().position(|p| !p.image.is_well_formed()) {
            return Err(PdfError::InvalidDocument(format!(
                "page {} has a malformed image",
                index + 1
            )));
        }

        let mut pdf = PdfWriter::new(writer);
        pdf.set_compression(self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();

        let uses_text = pages.iter().any(PdfPage::has_text);
        let font_refs: Vec<(StandardFont, u32)> = if uses_text {
            StandardFont::ALL
                .iter()
                .map(|font| (*font, pdf.allocate_object()))
                .collect()
        } else {
            Vec::new()
        };

        // (page, content stream, image)
        let page_objects: Vec<(u32, u32, u32)> = pages
            .iter()
            .map(|_| {
                (
                    pdf.allocate_object(),
                    pdf.allocate_object(),
                    pdf.allocate_object(),
                )
            })
            .collect();
        let page_refs: Vec<u32> = page_objects.iter().map(|(page, _, _)| *page).collect();

        pdf.write_object(catalog_ref, &create_catalog(pages_ref).into())?;
        pdf.write_object(pages_ref, &create_pages(&page_refs).into())?;
        pdf.write_object(info_ref, &self.info.to_dictionary().into())?;

        for (font, font_ref) in &font_refs {
            pdf.write_object(*font_ref, &font.to_dictionary().into())?;
        }

        for (page, (page_ref, content_ref, image_ref)) in pages.iter().zip(&page_objects) {
            pdf.write_stream_object(*image_ref, page.image.to_xobject())?;
            pdf.write_stream_object(*content_ref, PdfStream::new(page.content().into_bytes()))?;

            let mut resources = PdfDictionary::new();
            let mut xobjects = PdfDictionary::new();
            xobjects.insert(PAGE_IMAGE, PdfObject::Reference(*image_ref));
            resources.insert("XObject", xobjects.into());
            if page.has_text() {
                let mut fonts = PdfDictionary::new();
                for (font, font_ref) in &font_refs {
                    fonts.insert(font.resource_name(), PdfObject::Reference(*font_ref));
                }
                resources.insert("Font", fonts.into());
            }

            let mut page_dict = PdfDictionary::new().with_type("Page");
            page_dict.insert("Parent", PdfObject::Reference(pages_ref));
            page_dict.insert("MediaBox", PdfObject::rect(page.width, page.height));
            page_dict.insert("Contents", PdfObject::Reference(*content_ref));
            page_dict.insert("Resources", resources.into());
            pdf.write_object(*page_ref, &page_dict.into())?;
        }

        pdf.write_xref_and_trailer(catalog_ref, info_ref)?;
        pdf.finish()?;
        Ok(())
    }

    pub fn write_to_bytes(&self, pages: &[PdfPage]) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(pages, &mut buffer)?;
        Ok(buffer)
    }
}
