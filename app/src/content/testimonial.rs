use serde::Serialize;

/// Highest star count a testimonial can carry.
pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Clone, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    /// Star count, 0 to [`MAX_RATING`] inclusive. Checked once by
    /// [`Content::verify`](super::Content::verify), trusted everywhere else.
    pub rating: u8,
}
