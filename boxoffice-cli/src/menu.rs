use boxoffice_catalog::SeatNumber;

pub const MENU: &str = "Welcome to Movie Booking System
1. View all movies
2. Book ticket
3. Cancel ticket
4. Exit";

/// Top-level menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListMovies,
    Book,
    Cancel,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::ListMovies,
            "2" => Self::Book,
            "3" => Self::Cancel,
            "4" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Convert a 1-based index typed by the user into a 0-based one.
///
/// `None` for anything that is not a positive integer.
pub fn parse_index(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

pub fn parse_seat_number(input: &str) -> Option<SeatNumber> {
    input.trim().parse().ok()
}
