//! Pokedex Catalog
//!
//! A small in-memory Pokemon catalog: a shared record shape (`schema`
//! crate), an ordered collection type with add/remove/query/sort
//! operations, and standalone query functions (recursive id lookup,
//! most-common-type aggregation, attack-threshold filtering).

// --- MODULE DECLARATIONS ---
pub mod collection;
pub mod prefab_pokemon;
pub mod queries;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Pokemon, Stat};

// --- From this crate's modules (`src/`) ---
pub use collection::PokemonList;
pub use queries::{find_by_id, most_common_type, strong_pokemons, PokemonSource};
