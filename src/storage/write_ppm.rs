use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the buffer as binary PPM (P6). Alpha is dropped.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    let rgb: Vec<u8> = buffer.rgb_bytes().collect();
    writer.write_all(&rgb)?;
    writer.flush()
}

/// Writes a PPM file, creating missing parent directories.
pub fn save_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    write_ppm(buffer, BufWriter::new(File::create(filepath)?))
}
