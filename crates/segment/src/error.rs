use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Segmenter advanced after reaching the end of input")]
    Exhausted,
}
