//! Image XObjects

use super::objects::{PdfDictionary, PdfObject, PdfStream};

/// Uncompressed 8-bit DeviceRGB pixels; the writer applies FlateDecode
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageData {
    pub fn from_raw_rgb(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self { width, height, data }
    }

    /// True when the buffer holds exactly `width * height` RGB pixels
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.data.len() == self.width as usize * self.height as usize * 3
    }

    pub fn to_xobject(&self) -> PdfStream {
        let mut dict = PdfDictionary::new().with_type("XObject");
        dict.insert("Subtype", PdfObject::name("Image"));
        dict.insert("Width", PdfObject::Integer(self.width as i64));
        dict.insert("Height", PdfObject::Integer(self.height as i64));
        dict.insert("BitsPerComponent", PdfObject::Integer(8));
        dict.insert("ColorSpace", PdfObject::name("DeviceRGB"));
        PdfStream::new(self.data.clone()).with_dict(dict)
    }
}
