pub mod scryfall_client;

pub use scryfall_client::ScryfallClient;
