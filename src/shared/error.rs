use thiserror::Error;

/// A call that is illegal in the writer's current state: tokens written in an
/// order that could not produce legal JSON, or use of a closed writer.
///
/// A [SequenceError] is raised before anything is written, so the writer's
/// state and output are exactly what they were before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("JsonWriter is closed.")]
    Closed,
    #[error("Please begin an object before writing a name.")]
    NameOutsideObject,
    #[error("Already wrote a name, expecting a value.")]
    AlreadyWroteName,
    #[error("Dangling name: {0}")]
    DanglingName(String),
    #[error("Nesting problem.")]
    NestingProblem,
    #[error("JSON must have only one top-level value.")]
    MultipleTopLevelValues,
    #[error("Incomplete document")]
    IncompleteDocument,
}

/// A numeric value that has no JSON representation under the writer's current
/// strictness: a non-finite float, or caller-supplied number text that does
/// not match the JSON number grammar.
///
/// Like [SequenceError], this is raised before anything is written; a pending
/// object member name stays pending and can be paired with another value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Numeric values must be finite, but was {0}")]
    NonFinite(&'static str),
    #[error("String created by class {type_name} is not a valid JSON number: {text}")]
    InvalidLiteral {
        type_name: &'static str,
        text: String,
    },
}

/// The error type of all writer operations. `E` is the error type of the
/// sink the writer was created around; sink errors pass through unchanged.
#[derive(Debug, Error)]
pub enum WriteError<E: core::error::Error> {
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error(transparent)]
    Number(#[from] NumberError),
    #[error("{0}")]
    Io(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_messages() {
        assert_eq!(SequenceError::Closed.to_string(), "JsonWriter is closed.");
        assert_eq!(
            SequenceError::NameOutsideObject.to_string(),
            "Please begin an object before writing a name."
        );
        assert_eq!(
            SequenceError::AlreadyWroteName.to_string(),
            "Already wrote a name, expecting a value."
        );
        assert_eq!(
            SequenceError::DanglingName("color".to_owned()).to_string(),
            "Dangling name: color"
        );
        assert_eq!(SequenceError::NestingProblem.to_string(), "Nesting problem.");
        assert_eq!(
            SequenceError::MultipleTopLevelValues.to_string(),
            "JSON must have only one top-level value."
        );
        assert_eq!(
            SequenceError::IncompleteDocument.to_string(),
            "Incomplete document"
        );
    }

    #[test]
    fn test_number_messages() {
        assert_eq!(
            NumberError::NonFinite("NaN").to_string(),
            "Numeric values must be finite, but was NaN"
        );
        assert_eq!(
            NumberError::InvalidLiteral {
                type_name: "&str",
                text: "0.".to_owned(),
            }
            .to_string(),
            "String created by class &str is not a valid JSON number: 0."
        );
    }

    #[test]
    fn test_write_error_passes_messages_through() {
        let e: WriteError<std::io::Error> = SequenceError::NestingProblem.into();
        assert_eq!(e.to_string(), "Nesting problem.");

        let e: WriteError<std::io::Error> =
            WriteError::Io(std::io::Error::new(std::io::ErrorKind::Other, "pipe gone"));
        assert_eq!(e.to_string(), "pipe gone");
    }
}
