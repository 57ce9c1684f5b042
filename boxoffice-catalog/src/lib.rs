pub mod catalog;
pub mod error;
pub mod movie;

pub use catalog::BookingSystem;
pub use error::{BookingError, MovieError};
pub use movie::{
    BookingConfirmation, BookingRecord, CancellationReceipt, Movie, SeatNumber, ShowAvailability,
};
