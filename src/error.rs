/// Errors from compiling or applying a coordinate template
///
/// Geometric degeneracies (coincident points, parallel courses, empty
/// bounds) are not errors; those operations return `Option`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid coordinate template: {0}")]
    InvalidTemplate(#[from] regex::Error),

    #[error("Input {input:?} does not match coordinate template {template:?}")]
    NoMatch { input: String, template: String },
}

pub type Result<T> = std::result::Result<T, Error>;
