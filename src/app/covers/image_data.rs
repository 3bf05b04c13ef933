/// Raw RGBA pixels handed from the fetch task to the UI thread.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(
            rgba.len(),
            (width * height * 4) as usize,
            "RGBA buffer size mismatch"
        );
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Decode any supported encoded image (png, jpeg, gif, webp).
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (w, h) = rgba.dimensions();
        Ok(Self::new(w, h, rgba.into_vec()))
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_bytes() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();

        let data = ImageData::decode(&bytes).unwrap();
        assert_eq!(data.size(), [3, 2]);
        assert_eq!(&data.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(ImageData::decode(b"definitely not an image").is_err());
    }
}
