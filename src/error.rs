use failure::Fail;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum DistanceError {
    #[fail(display = "Algorithm not implemented: {}", _0)]
    UnsupportedAlgorithm(String),

    #[fail(display = "Invalid argument: {}", _0)]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DistanceError>;
