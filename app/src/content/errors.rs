#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Duplicate project id `{id}'")]
    DuplicateProjectId { id: String },

    #[error("Rating {rating} given by `{name}' is out of range (0-{max})")]
    RatingOutOfRange { name: String, rating: u8, max: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
