//! Tests for rendering intensity fields into images

#[cfg(test)]
mod tests {
    use greedythread::io::compositor::{
        export_field_as_png, to_channel, to_display_buffer, to_gray_image,
    };
    use greedythread::raster::field::IntensityField;
    use tempfile::TempDir;

    // Tests channel mapping rounds and clamps
    // Verified by truncating instead of rounding
    #[test]
    fn test_to_channel() {
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(1.0), 255);
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(to_channel(-0.3), 0);
        assert_eq!(to_channel(1.7), 255);
    }

    // Tests display buffer is opaque grey with rows mapped to y
    // Verified by transposing rows and columns
    #[test]
    fn test_display_buffer() {
        let Ok(field) = IntensityField::from_values(2, vec![0.0, 1.0, 0.5, 0.25]) else {
            unreachable!("four values fit a 2x2 field");
        };
        let buffer = to_display_buffer(&field);

        assert_eq!(buffer.dimensions(), (2, 2));
        assert_eq!(buffer.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(buffer.get_pixel(0, 1).0, [128, 128, 128, 255]);
        assert_eq!(buffer.get_pixel(1, 1).0, [64, 64, 64, 255]);
    }

    // Tests grey image matches the display buffer channel values
    // Verified by inverting intensities in the grey image
    #[test]
    fn test_gray_image() {
        let field = IntensityField::filled(3, 0.2);
        let gray = to_gray_image(&field);
        assert_eq!(gray.dimensions(), (3, 3));
        assert!(gray.pixels().all(|p| p.0 == [51]));
    }

    // Tests PNG export creates parent directories and round trips dimensions
    // Verified by skipping directory creation
    #[test]
    fn test_export_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.png");
        let field = IntensityField::filled(5, 0.0);

        assert!(export_field_as_png(&field, &path).is_ok());
        let saved = image::open(&path).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (5, 5));
        assert_eq!(saved.get_pixel(2, 2).0, [0, 0, 0, 255]);
    }
}
