use std::io::{BufRead, Write};

use boxoffice_catalog::{BookingError, BookingSystem};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::menu::{self, MenuChoice, MENU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Interactive menu loop over any line reader and writer.
///
/// Every request reaches the catalog with 0-based indices; results are
/// printed with their `Display` text.
pub struct Session<R, W> {
    catalog: BookingSystem,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: BookingSystem, input: R, output: W) -> Self {
        Self { catalog, input, output }
    }

    /// Run until the guest exits or input ends
    pub fn run(&mut self) -> AppResult<()> {
        info!(movies = self.catalog.len(), "booking session started");

        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                break;
            };

            let choice = MenuChoice::parse(&line);
            debug!(?choice, "menu choice");

            let step = match choice {
                MenuChoice::ListMovies => {
                    self.display_movie_list()?;
                    Step::Continue
                }
                MenuChoice::Book => self.book()?,
                MenuChoice::Cancel => self.cancel()?,
                MenuChoice::Exit => Step::Quit,
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Step::Continue
                }
            };

            if step == Step::Quit {
                break;
            }
            write!(self.output, "\n\n")?;
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        info!("booking session ended");
        Ok(())
    }

    pub fn into_parts(self) -> (BookingSystem, W) {
        (self.catalog, self.output)
    }

    fn book(&mut self) -> AppResult<Step> {
        self.display_movie_list()?;
        let Some(movie_index) = self.select_movie()? else {
            return Ok(Step::Quit);
        };
        let Some(movie_index) = movie_index else {
            return Ok(Step::Continue);
        };

        let Some(show_line) = self.prompt("Enter the show index: ")? else {
            return Ok(Step::Quit);
        };
        let Some(full_name) = self.prompt("Enter your full name: ")? else {
            return Ok(Step::Quit);
        };
        let Some(show_index) = menu::parse_index(&show_line) else {
            writeln!(self.output, "Invalid show index.")?;
            return Ok(Step::Continue);
        };

        match self.catalog.book_ticket(movie_index, show_index, &full_name) {
            Ok(confirmation) => writeln!(self.output, "{confirmation}")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Step::Continue)
    }

    fn cancel(&mut self) -> AppResult<Step> {
        self.display_movie_list()?;
        let Some(movie_index) = self.select_movie()? else {
            return Ok(Step::Quit);
        };
        let Some(movie_index) = movie_index else {
            return Ok(Step::Continue);
        };

        let Some(show_line) = self.prompt("Enter the show index: ")? else {
            return Ok(Step::Quit);
        };
        let Some(seat_line) = self.prompt("Enter your seat number: ")? else {
            return Ok(Step::Quit);
        };
        let Some(show_index) = menu::parse_index(&show_line) else {
            writeln!(self.output, "Invalid show index.")?;
            return Ok(Step::Continue);
        };
        let Some(seat_number) = menu::parse_seat_number(&seat_line) else {
            writeln!(self.output, "Invalid seat number.")?;
            return Ok(Step::Continue);
        };

        match self.catalog.cancel_ticket(movie_index, show_index, seat_number) {
            Ok(receipt) => writeln!(self.output, "{receipt}")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Step::Continue)
    }

    /// Prompt for a movie and print its show times.
    ///
    /// Outer `None` means input ended, inner `None` that the index was
    /// rejected (and reported).
    fn select_movie(&mut self) -> AppResult<Option<Option<usize>>> {
        let Some(line) = self.prompt("Enter the movie index: ")? else {
            return Ok(None);
        };

        let resolved = menu::parse_index(&line)
            .ok_or(BookingError::InvalidMovieIndex { index: self.catalog.len() })
            .and_then(|index| {
                self.catalog
                    .show_availability(index)
                    .map(|(title, shows)| (index, title.to_string(), shows))
            });

        match resolved {
            Ok((index, title, shows)) => {
                writeln!(self.output, "Showtimes for {title}:")?;
                for (position, show) in shows.iter().enumerate() {
                    writeln!(
                        self.output,
                        "{}. {}: {} seats available",
                        position + 1,
                        show.show_time,
                        show.available
                    )?;
                }
                Ok(Some(Some(index)))
            }
            Err(err) => {
                writeln!(self.output, "{err}")?;
                Ok(Some(None))
            }
        }
    }

    fn display_movie_list(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Available Movies:")?;
        for (index, title) in self.catalog.list_movies().iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, title)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
