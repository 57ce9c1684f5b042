use crate::movie::SeatNumber;

/// Reported, non-fatal outcomes of booking and cancellation requests.
///
/// The `Display` text of each variant is the message shown to the guest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid movie index.")]
    InvalidMovieIndex { index: usize },

    #[error("Invalid show index.")]
    InvalidShowIndex { index: usize },

    #[error("Sorry, no available seats for {title} at {show_time}.")]
    NoSeatsAvailable {
        title: String,
        show_time: String,
    },

    #[error("Invalid seat number or no booking found for {title} at {show_time}.")]
    BookingNotFound {
        title: String,
        show_time: String,
        seat_number: SeatNumber,
    },
}

/// Configuration errors raised while constructing a movie
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MovieError {
    #[error("Movie {title} must have at least one seat")]
    InvalidCapacity { title: String },

    #[error("Movie {title} lists show time {show_time} more than once")]
    DuplicateShowTime {
        title: String,
        show_time: String,
    },
}
