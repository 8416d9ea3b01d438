pub mod film_list;
pub mod films_page;
pub mod header;
pub mod help_bar;
pub mod refetch_button;

// Re-export core Component trait
pub use films_core::Component;

pub use film_list::{FilmList, FilmListProps, SPINNERS};
pub use films_page::{FilmsPage, FilmsPageProps};
pub use header::{Header, HeaderProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use refetch_button::{RefetchButton, RefetchButtonProps, CACHE_HINT, REFETCH_LABEL};
