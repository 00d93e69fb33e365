//! Tests for intensity field storage, darkening and error measures

#[cfg(test)]
mod tests {
    use greedythread::raster::field::IntensityField;

    // Tests blank fields start white
    // Verified by initializing blank fields to zero
    #[test]
    fn test_blank_field() {
        let field = IntensityField::blank(3);
        assert_eq!(field.resolution(), 3);
        assert_eq!(field.len(), 9);
        assert!(!field.is_empty());
        assert!(field.as_slice().iter().all(|&v| (v - 1.0).abs() < f64::EPSILON));
    }

    // Tests row-major construction and both addressing forms
    // Verified by transposing the shape in from_values
    #[test]
    fn test_from_values_row_major() {
        let Ok(field) = IntensityField::from_values(2, vec![0.1, 0.2, 0.3, 0.4]) else {
            unreachable!("four values fit a 2x2 field");
        };

        assert_eq!(field.get(0, 1), Some(0.2));
        assert_eq!(field.get(1, 0), Some(0.3));
        assert_eq!(field.value(3), Some(0.4));
        assert_eq!(field.get(2, 0), None);
        assert_eq!(field.value(4), None);
    }

    // Tests mismatched value counts are rejected
    // Verified by padding short inputs instead of failing
    #[test]
    fn test_from_values_wrong_length() {
        assert!(IntensityField::from_values(2, vec![0.0; 3]).is_err());
        assert!(IntensityField::from_values(2, vec![0.0; 5]).is_err());
    }

    // Tests set writes in range and ignores out-of-range positions
    // Verified by panicking on out-of-range writes
    #[test]
    fn test_set() {
        let mut field = IntensityField::blank(2);
        field.set(1, 1, 0.25);
        field.set(5, 5, 0.0);

        assert_eq!(field.get(1, 1), Some(0.25));
        assert_eq!(field.value(3), Some(0.25));
    }

    // Tests repeated indices darken once per occurrence
    // Verified by deduplicating indices before darkening
    #[test]
    fn test_darken_repeated_indices() {
        let mut field = IntensityField::blank(3);
        field.darken(&[4, 4, 0, 99], 0.5);

        assert_eq!(field.value(4), Some(0.25));
        assert_eq!(field.value(0), Some(0.5));
        assert_eq!(field.value(1), Some(1.0));
    }

    // Tests squared error and its size check
    // Verified by returning absolute instead of squared differences
    #[test]
    fn test_squared_error() {
        let a = IntensityField::blank(2);
        let b = IntensityField::filled(2, 0.5);

        let Ok(error) = a.squared_error(&b) else {
            unreachable!("same resolution");
        };
        assert!((error - 1.0).abs() < 1e-12);

        let c = IntensityField::blank(3);
        assert!(a.squared_error(&c).is_err());
    }

    // Tests mean intensity including the empty field fallback
    // Verified by returning zero for empty fields
    #[test]
    fn test_mean() {
        let Ok(field) = IntensityField::from_values(2, vec![0.0, 1.0, 0.5, 0.5]) else {
            unreachable!("four values fit a 2x2 field");
        };
        assert!((field.mean() - 0.5).abs() < 1e-12);

        let empty = IntensityField::blank(0);
        assert!(empty.is_empty());
        assert!((empty.mean() - 1.0).abs() < f64::EPSILON);
    }
}
