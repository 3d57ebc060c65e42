use std::io;
use thiserror::Error;

/// Failures the demo can report.
///
/// Allocation exhaustion is deliberately absent: the global allocator aborts
/// the process and nothing here tries to recover from it.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> Result<()> {
            Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, DemoError::Output(_)));
        assert_eq!(err.to_string(), "failed to write demo output: pipe closed");
    }
}
