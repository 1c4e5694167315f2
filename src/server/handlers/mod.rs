pub mod facility;
pub mod locations;
pub mod maps;
pub mod pickups;
pub mod receipts;
pub mod routes;
pub mod sessions;
