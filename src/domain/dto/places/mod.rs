pub mod places_query;

pub use places_query::PlacesQuery;
