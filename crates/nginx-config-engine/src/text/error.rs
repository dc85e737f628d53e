/// Errors raised by [`Text`](super::Text) queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The queried position does not index a byte of the buffer.
    #[error("Index out of range. Position: {position}, length: {len}")]
    OutOfRange { position: usize, len: usize },
}
