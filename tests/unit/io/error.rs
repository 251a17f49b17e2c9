//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use swaptile::PuzzleError;
    use swaptile::io::error::{invalid_board, invalid_parameter};

    // Tests image load errors name the path and chain the decoder error
    // Verified by omitting the source from the message
    #[test]
    fn test_image_load_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let error = PuzzleError::ImageLoad {
            path: PathBuf::from("resources/missing.jpeg"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("resources/missing.jpeg"));
        assert!(message.contains("no such file"));
        assert!(error.source().is_some());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("width", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests board errors carry the violated invariant
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_board_error() {
        let error = invalid_board(&"expected exactly one blank tile, got 2");
        assert_eq!(
            error.to_string(),
            "Invalid board: expected exactly one blank tile, got 2"
        );
    }

    #[test]
    fn test_invalid_source_data_error() {
        let error = PuzzleError::InvalidSourceData {
            reason: "a 2x2 image cannot be cut into 4x3 tiles".to_string(),
        };
        assert!(error.to_string().contains("4x3 tiles"));
    }
}
