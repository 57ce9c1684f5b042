use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BookingError, MovieError};

pub type SeatNumber = u32;

/// A seat held by a guest for one show time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub seat_number: SeatNumber,
    pub full_name: String,
    pub booked_at: DateTime<Utc>,
}

/// Remaining seats for one show time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowAvailability {
    pub show_time: String,
    pub available: usize,
}

/// Successful booking, displayed as the guest's confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub title: String,
    pub show_time: String,
    pub seat_number: SeatNumber,
    pub full_name: String,
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dear {}, your ticket for {} at {} has been successfully booked. Seat number: {}",
            self.full_name, self.title, self.show_time, self.seat_number
        )
    }
}

/// Successful cancellation, naming the guest who held the seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationReceipt {
    pub title: String,
    pub show_time: String,
    pub seat_number: SeatNumber,
    pub full_name: String,
}

impl fmt::Display for CancellationReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket canceled for {} at {}. Seat number: {}. Booked by: {}",
            self.title, self.show_time, self.seat_number, self.full_name
        )
    }
}

/// Seat state of a single show time.
///
/// Every seat number in `1..=capacity` lives in exactly one of the two
/// collections.
#[derive(Debug, Clone)]
struct ShowSeats {
    available: BTreeSet<SeatNumber>,
    booked: BTreeMap<SeatNumber, BookingRecord>,
}

impl ShowSeats {
    fn new(capacity: SeatNumber) -> Self {
        Self {
            available: (1..=capacity).collect(),
            booked: BTreeMap::new(),
        }
    }

    /// Hand out the lowest free seat
    fn allocate(&mut self, full_name: &str) -> Option<SeatNumber> {
        let seat_number = self.available.pop_first()?;
        self.booked.insert(
            seat_number,
            BookingRecord {
                seat_number,
                full_name: full_name.to_string(),
                booked_at: Utc::now(),
            },
        );
        Some(seat_number)
    }

    fn release(&mut self, seat_number: SeatNumber) -> Option<BookingRecord> {
        let record = self.booked.remove(&seat_number)?;
        self.available.insert(seat_number);
        Some(record)
    }
}

/// A movie with its show times and per-show seat inventory.
///
/// Seat state for a show time is created the first time that show time is
/// booked or listed. Until then it holds no entry, which is what
/// [`Movie::total_seats`] observes.
#[derive(Debug, Clone)]
pub struct Movie {
    title: String,
    show_timings: Vec<String>,
    capacity: SeatNumber,
    shows: HashMap<String, ShowSeats>,
}

impl Movie {
    pub fn new<I, S>(
        title: impl Into<String>,
        show_timings: I,
        total_seats: SeatNumber,
    ) -> Result<Self, MovieError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let title = title.into();
        if total_seats == 0 {
            return Err(MovieError::InvalidCapacity { title });
        }

        let mut show_timings_vec: Vec<String> = Vec::new();
        for show_time in show_timings {
            let show_time = show_time.into();
            if show_timings_vec.contains(&show_time) {
                return Err(MovieError::DuplicateShowTime { title, show_time });
            }
            show_timings_vec.push(show_time);
        }

        Ok(Self {
            title,
            show_timings: show_timings_vec,
            capacity: total_seats,
            shows: HashMap::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show_timings(&self) -> &[String] {
        &self.show_timings
    }

    /// Configured number of seats for every show time
    pub fn capacity(&self) -> SeatNumber {
        self.capacity
    }

    /// Book the lowest-numbered free seat for `show_time`
    pub fn book_seat(
        &mut self,
        show_time: &str,
        full_name: &str,
    ) -> Result<BookingConfirmation, BookingError> {
        let seat_number = match self
            .show_seats_mut(show_time)
            .and_then(|seats| seats.allocate(full_name))
        {
            Some(seat_number) => seat_number,
            None => {
                debug!(title = %self.title, show_time, "no seat left to allocate");
                return Err(BookingError::NoSeatsAvailable {
                    title: self.title.clone(),
                    show_time: show_time.to_string(),
                });
            }
        };

        debug!(title = %self.title, show_time, seat_number, "seat booked");
        Ok(BookingConfirmation {
            title: self.title.clone(),
            show_time: show_time.to_string(),
            seat_number,
            full_name: full_name.to_string(),
        })
    }

    /// Release a booked seat back to the pool
    pub fn cancel_seat(
        &mut self,
        show_time: &str,
        seat_number: SeatNumber,
    ) -> Result<CancellationReceipt, BookingError> {
        // A failed lookup must not create seat state for the show time.
        let record = self
            .shows
            .get_mut(show_time)
            .and_then(|seats| seats.release(seat_number))
            .ok_or_else(|| BookingError::BookingNotFound {
                title: self.title.clone(),
                show_time: show_time.to_string(),
                seat_number,
            })?;

        debug!(title = %self.title, show_time, seat_number, "seat released");
        Ok(CancellationReceipt {
            title: self.title.clone(),
            show_time: show_time.to_string(),
            seat_number,
            full_name: record.full_name,
        })
    }

    /// Free seats summed over the show times that hold seat state.
    ///
    /// Show times never booked or listed contribute nothing, so this is not
    /// the configured capacity.
    pub fn total_seats(&self) -> usize {
        self.shows.values().map(|seats| seats.available.len()).sum()
    }

    /// Free seats per configured show time, in configuration order
    pub fn list_availability(&mut self) -> Vec<ShowAvailability> {
        let capacity = self.capacity;
        self.show_timings
            .iter()
            .map(|show_time| {
                let seats = self
                    .shows
                    .entry(show_time.clone())
                    .or_insert_with(|| ShowSeats::new(capacity));
                ShowAvailability {
                    show_time: show_time.clone(),
                    available: seats.available.len(),
                }
            })
            .collect()
    }

    /// Free seat numbers in ascending order, `None` for a show time
    /// without seat state
    pub fn available_seats(&self, show_time: &str) -> Option<Vec<SeatNumber>> {
        self.shows
            .get(show_time)
            .map(|seats| seats.available.iter().copied().collect())
    }

    /// Booking records in ascending seat order
    pub fn bookings(&self, show_time: &str) -> Vec<BookingRecord> {
        self.shows
            .get(show_time)
            .map(|seats| seats.booked.values().cloned().collect())
            .unwrap_or_default()
    }

    fn show_seats_mut(&mut self, show_time: &str) -> Option<&mut ShowSeats> {
        if !self.show_timings.iter().any(|s| s == show_time) {
            return None;
        }
        let capacity = self.capacity;
        Some(
            self.shows
                .entry(show_time.to_string())
                .or_insert_with(|| ShowSeats::new(capacity)),
        )
    }
}
