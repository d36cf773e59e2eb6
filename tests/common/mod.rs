//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

/// A blank RGB image, encoded by extension (png or jpg).
pub fn write_blank_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(32, 32, image::Rgb([255, 255, 255]))
        .save(&path)
        .expect("write image fixture");
    path
}

/// Build a minimal PDF with one Helvetica text line per page.
///
/// Byte offsets for the xref table are computed while writing, so the
/// document is well-formed for any page text (ASCII, no parentheses).
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".into());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".into());

    for (i, text) in pages.iter().enumerate() {
        let content_id = 5 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>"
        ));
        let stream = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_at = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for off in offsets {
        out.push_str(&format!("{off:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    out.into_bytes()
}

/// Install an executable shell script standing in for the OCR engine.
///
/// It answers `--version` and otherwise runs `body` with the engine's
/// arguments (`<image> stdout [-l <lang>]`) as `$1..$4`.
#[cfg(unix)]
pub fn fake_ocr_engine(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo \"fake-ocr 1.0\"; exit 0; fi\n{body}\n"
    );
    let path = write_file(dir, "fake-ocr", script);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("make fake OCR engine executable");
    path
}
