use tracing::{debug, info};

use crate::error::BookingError;
use crate::movie::{BookingConfirmation, CancellationReceipt, Movie, SeatNumber, ShowAvailability};

/// Ordered movie list that routes index-based requests to a movie
#[derive(Debug, Clone, Default)]
pub struct BookingSystem {
    movies: Vec<Movie>,
}

impl BookingSystem {
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Append a movie; its position is its display index
    pub fn add_movie(&mut self, movie: Movie) {
        info!(
            title = movie.title(),
            index = self.movies.len(),
            show_times = movie.show_timings().len(),
            seats = movie.capacity(),
            "movie added to catalog"
        );
        self.movies.push(movie);
    }

    pub fn movie(&self, movie_index: usize) -> Option<&Movie> {
        self.movies.get(movie_index)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Titles in display order
    pub fn list_movies(&self) -> Vec<&str> {
        self.movies.iter().map(Movie::title).collect()
    }

    /// Title and per-show availability of one movie
    pub fn show_availability(
        &mut self,
        movie_index: usize,
    ) -> Result<(&str, Vec<ShowAvailability>), BookingError> {
        let movie = self.movie_mut(movie_index)?;
        let availability = movie.list_availability();
        Ok((movie.title(), availability))
    }

    pub fn book_ticket(
        &mut self,
        movie_index: usize,
        show_index: usize,
        full_name: &str,
    ) -> Result<BookingConfirmation, BookingError> {
        let (movie, show_time) = self.resolve(movie_index, show_index)?;
        movie.book_seat(&show_time, full_name)
    }

    pub fn cancel_ticket(
        &mut self,
        movie_index: usize,
        show_index: usize,
        seat_number: SeatNumber,
    ) -> Result<CancellationReceipt, BookingError> {
        let (movie, show_time) = self.resolve(movie_index, show_index)?;
        movie.cancel_seat(&show_time, seat_number)
    }

    fn movie_mut(&mut self, movie_index: usize) -> Result<&mut Movie, BookingError> {
        self.movies
            .get_mut(movie_index)
            .ok_or(BookingError::InvalidMovieIndex { index: movie_index })
    }

    /// Both indices are checked before any seat state is touched
    fn resolve(
        &mut self,
        movie_index: usize,
        show_index: usize,
    ) -> Result<(&mut Movie, String), BookingError> {
        let movie = self.movie_mut(movie_index)?;
        let show_time = movie
            .show_timings()
            .get(show_index)
            .cloned()
            .ok_or(BookingError::InvalidShowIndex { index: show_index })?;
        debug!(movie_index, show_index, show_time = %show_time, "request resolved");
        Ok((movie, show_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> BookingSystem {
        let mut system = BookingSystem::new();
        system.add_movie(Movie::new("Shaitaan", ["10:00 AM", "1:00 PM", "4:00 PM"], 50).unwrap());
        system.add_movie(Movie::new("Article 370", ["11:00 AM", "3:00 PM", "7:00 PM"], 60).unwrap());
        system
    }

    #[test]
    fn test_list_movies_in_insertion_order() {
        let system = system();
        assert_eq!(system.list_movies(), vec!["Shaitaan", "Article 370"]);
        assert_eq!(system.len(), 2);
        assert!(!system.is_empty());
        assert!(BookingSystem::default().is_empty());
    }

    #[test]
    fn test_book_and_cancel_by_index() {
        let mut system = system();

        let confirmation = system.book_ticket(1, 2, "Alice").unwrap();
        assert_eq!(confirmation.title, "Article 370");
        assert_eq!(confirmation.show_time, "7:00 PM");
        assert_eq!(confirmation.seat_number, 1);

        let receipt = system.cancel_ticket(1, 2, 1).unwrap();
        assert_eq!(receipt.full_name, "Alice");

        // The other movie is untouched
        assert_eq!(system.movie(0).unwrap().total_seats(), 0);
    }

    #[test]
    fn test_invalid_indices() {
        let mut system = system();

        assert_eq!(
            system.book_ticket(2, 0, "Alice").unwrap_err(),
            BookingError::InvalidMovieIndex { index: 2 }
        );
        assert_eq!(
            system.book_ticket(0, 3, "Alice").unwrap_err(),
            BookingError::InvalidShowIndex { index: 3 }
        );
        assert_eq!(
            system.cancel_ticket(5, 0, 1).unwrap_err().to_string(),
            "Invalid movie index."
        );
        assert_eq!(
            system.cancel_ticket(0, 9, 1).unwrap_err().to_string(),
            "Invalid show index."
        );

        // No seat state was created by the rejected requests
        assert_eq!(system.movie(0).unwrap().total_seats(), 0);
    }

    #[test]
    fn test_show_availability() {
        let mut system = system();
        system.book_ticket(0, 1, "Alice").unwrap();

        let (title, availability) = system.show_availability(0).unwrap();
        assert_eq!(title, "Shaitaan");
        let counts: Vec<_> = availability.iter().map(|a| a.available).collect();
        assert_eq!(counts, vec![50, 49, 50]);

        assert_eq!(
            system.show_availability(7).unwrap_err(),
            BookingError::InvalidMovieIndex { index: 7 }
        );
    }
}
