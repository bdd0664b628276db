//! Recognition of the downloaded image payloads

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MARKERS: [&[u8]; 2] = [b"JFIF", b"Exif"];
const GIF_SIGNATURES: [&[u8]; 2] = [b"GIF87a", b"GIF89a"];
// TIFF in both byte orders and BMP
const SHORT_SIGNATURES: [&[u8]; 3] = [b"MM", b"II", b"BM"];

/// Does the payload start with the magic number of a known image format?
///
/// The PNG, JPEG (JFIF or Exif), GIF, TIFF and BMP are recognized.
///
/// ```
/// use geoformat::is_image_data;
///
/// assert!(is_image_data(b"GIF89a..."));
/// assert!(!is_image_data(b"<html>"));
/// ```
pub fn is_image_data(data: &[u8]) -> bool {
    if data.starts_with(PNG_SIGNATURE) {
        return true;
    }

    if let Some(marker) = data.get(6..10) {
        if JPEG_MARKERS.iter().any(|&jpeg| jpeg == marker) {
            return true;
        }
    }

    GIF_SIGNATURES
        .iter()
        .chain(SHORT_SIGNATURES.iter())
        .any(|signature| data.starts_with(signature))
}
