//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use greedythread::ThreadError;
    use greedythread::io::error::{invalid_parameter, invalid_source};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ThreadError::FileSystem {
            path: "/tmp/test.csv".into(),
            operation: "create file",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("/tmp/test.csv"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("num_pins", &1, &"at least two pins are required");

        let message = error.to_string();
        assert!(message.contains("num_pins"));
        assert!(message.contains("'1'"));
        assert!(message.contains("at least two pins are required"));
        assert!(error.source().is_none());
    }

    // Tests InvalidSourceData carries its reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_source_error() {
        let error = invalid_source(&"3 bytes for a 2x2 image");
        assert!(matches!(error, ThreadError::InvalidSourceData { .. }));
        assert!(error.to_string().contains("3 bytes for a 2x2 image"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = ThreadError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversions from underlying errors keep their source
    // Verified by dropping the source in From impls
    #[test]
    fn test_from_conversions() {
        let io_error = std::io::Error::other("disk full");
        let converted: ThreadError = io_error.into();
        assert!(matches!(converted, ThreadError::FileSystem { .. }));
        assert!(converted.source().is_some());

        let csv_error: csv::Error = std::io::Error::other("broken pipe").into();
        let converted: ThreadError = csv_error.into();
        assert!(matches!(converted, ThreadError::CsvExport { .. }));
        assert!(converted.to_string().contains("broken pipe"));
    }
}
