pub mod client;
pub mod query;
pub mod types;

pub use client::{NetworkClient, NetworkError, PlayerSource, make_url};
pub use query::{QueryItem, SearchField, SearchParameters, SortOption, search_parameters_to_query_items};
pub use types::Player;
