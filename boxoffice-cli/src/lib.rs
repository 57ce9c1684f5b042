pub mod app_config;
pub mod error;
pub mod menu;
pub mod session;

use boxoffice_catalog::{BookingSystem, Movie};

pub use app_config::Config;
pub use error::{AppError, AppResult};
pub use session::Session;

/// Build the catalog from the configured seed movies, in file order
pub fn build_catalog(config: &Config) -> AppResult<BookingSystem> {
    let mut catalog = BookingSystem::new();
    for movie in &config.movies {
        catalog.add_movie(Movie::new(
            movie.title.clone(),
            movie.show_timings.iter().cloned(),
            movie.total_seats,
        )?);
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::{LoggingConfig, MovieConfig};

    fn config(movies: Vec<MovieConfig>) -> Config {
        Config {
            logging: LoggingConfig { filter: "warn".to_string() },
            movies,
        }
    }

    #[test]
    fn test_build_catalog() {
        let catalog = build_catalog(&config(vec![
            MovieConfig {
                title: "Dune".to_string(),
                show_timings: vec!["6:00 PM".to_string(), "9:00 PM".to_string()],
                total_seats: 4,
            },
            MovieConfig {
                title: "Heat".to_string(),
                show_timings: vec!["8:00 PM".to_string()],
                total_seats: 2,
            },
        ]))
        .unwrap();

        assert_eq!(catalog.list_movies(), vec!["Dune", "Heat"]);
        assert_eq!(catalog.movie(0).unwrap().show_timings().len(), 2);
        assert_eq!(catalog.movie(1).unwrap().capacity(), 2);
    }

    #[test]
    fn test_build_catalog_rejects_empty_theater() {
        let err = build_catalog(&config(vec![MovieConfig {
            title: "Nowhere".to_string(),
            show_timings: vec!["6:00 PM".to_string()],
            total_seats: 0,
        }]))
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidMovie(_)));
        assert!(err.to_string().contains("Nowhere"));
    }
}
