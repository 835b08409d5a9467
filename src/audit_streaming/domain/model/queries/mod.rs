pub mod list_destinations_query;
