use pokedex::prefab_pokemon::{bulbasaur, charmander, pikachu};
use pokedex::{find_by_id, most_common_type, strong_pokemons, PokemonList};

fn main() {
    let mut pikachu = pikachu();

    // Example 1: record accessors
    println!("Name: {}", pikachu.name());
    println!("Weight: {}", pikachu.weight());
    println!("Main type: {:?}", pikachu.main_type());
    println!("Attack: {:?}", pikachu.attack());

    let old_name = pikachu.name().to_string();
    pikachu.set_name(format!("{} TEST", old_name));
    println!("Name (after setter): {}", pikachu.name());
    pikachu.set_name(old_name);

    pikachu.set_main_type("fire");
    println!("Main type (after setter): {:?}", pikachu.main_type());
    pikachu.set_main_type("electric");

    let old_weight = pikachu.weight();
    pikachu.set_weight(old_weight + 1);
    println!("Weight (after setter): {}", pikachu.weight());
    pikachu.set_weight(old_weight);

    println!();

    // Example 2: build up a catalog
    let mut list = PokemonList::new();
    list.add(pikachu.clone());
    list.add_many(vec![bulbasaur(), charmander()]);

    // Example 3: removals - a miss is a no-op, a hit drops every match
    list.remove_by_id(999);
    list.remove_by_id(1);

    println!("--- show ---");
    list.show();
    println!();

    // Example 4: weight range query (inclusive bounds)
    let in_range: Vec<&str> = list
        .get_by_weight_range(60, 90)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    println!("Weight 60..90 -> {:?}", in_range);

    // Example 5: sort by base experience, ascending
    let sorted: Vec<String> = list
        .sort_by_base_experience()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    println!("Sorted by base exp -> {:?}", sorted);

    // Example 6: recursive lookup by id
    println!(
        "Find id=4 -> {:?}",
        find_by_id(&list, 4).map(|p| p.name.as_str())
    );

    // Example 7: most common type across the catalog
    println!("Most common type -> {:?}", most_common_type(&list));

    // Example 8: strong Pokemon by attack threshold
    println!("Strong (atk >= 50) -> {:?}", strong_pokemons(&list, 50));

    println!();

    // Example 9: records are plain serde data
    match serde_json::to_string_pretty(&pikachu) {
        Ok(json) => println!("Pikachu as JSON:\n{}", json),
        Err(e) => println!("Error serializing Pikachu: {}", e),
    }
}
