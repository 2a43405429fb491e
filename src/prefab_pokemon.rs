//! Prefab catalog entries used by the demo binary and tests.

use crate::collection::PokemonList;
use schema::{Pokemon, Stat};

pub fn pikachu() -> Pokemon {
    Pokemon::new(
        25,
        "Pikachu",
        "Pikachu that can generate powerful electricity have cheek sacs that are \
         extra soft and super stretchy.",
        4,
        60,
        112,
        vec!["static".to_string(), "lightning-rod".to_string()],
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png",
    )
    .with_types(vec!["electric".to_string()])
    .with_stats(vec![
        Stat::new("hp", 35),
        Stat::new("attack", 55),
        Stat::new("defense", 40),
        Stat::new("speed", 90),
    ])
}

pub fn bulbasaur() -> Pokemon {
    Pokemon::new(
        1,
        "Bulbasaur",
        "There is a plant seed on its back right from the day this Pokemon is \
         born. The seed slowly grows larger.",
        7,
        69,
        64,
        vec!["overgrow".to_string(), "chlorophyll".to_string()],
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/1.png",
    )
    .with_types(vec!["grass".to_string(), "poison".to_string()])
    .with_stats(vec![
        Stat::new("hp", 45),
        Stat::new("attack", 49),
        Stat::new("defense", 49),
        Stat::new("speed", 45),
    ])
}

pub fn charmander() -> Pokemon {
    Pokemon::new(
        4,
        "Charmander",
        "It has a preference for hot things. When it rains, steam is said to \
         spout from the tip of its tail.",
        6,
        85,
        62,
        vec!["blaze".to_string(), "solar-power".to_string()],
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/4.png",
    )
    .with_types(vec!["fire".to_string()])
    .with_stats(vec![
        Stat::new("hp", 39),
        Stat::new("attack", 52),
        Stat::new("defense", 43),
        Stat::new("speed", 65),
    ])
}

/// A list preloaded with all prefab entries, in Pokedex-demo order.
pub fn sample_list() -> PokemonList {
    let mut list = PokemonList::new();
    list.add_many(vec![pikachu(), bulbasaur(), charmander()]);
    list
}
