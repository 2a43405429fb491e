use crate::queries::PokemonSource;
use schema::Pokemon;
use serde::{Deserialize, Serialize};

/// An ordered, mutable, in-memory catalog of Pokemon records.
///
/// The list owns its records exclusively and is only mutated through its
/// own operations. It is not thread-safe; concurrent use must be
/// serialized by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonList {
    pub items: Vec<Pokemon>,
}

impl PokemonList {
    pub fn new() -> Self {
        PokemonList { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a record. Duplicate ids are allowed; uniqueness is the
    /// caller's discipline.
    pub fn add(&mut self, pokemon: Pokemon) {
        self.items.push(pokemon);
    }

    /// Append a batch of records, preserving their relative order.
    pub fn add_many(&mut self, pokemon: impl IntoIterator<Item = Pokemon>) {
        self.items.extend(pokemon);
    }

    /// Remove every record with the given id, keeping survivor order.
    /// A miss leaves the list unchanged.
    pub fn remove_by_id(&mut self, id: u32) {
        self.items.retain(|pokemon| pokemon.id != id);
    }

    /// One display line per record, in list order. A record with no types
    /// renders the literal `unknown` as its category.
    pub fn show_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|pokemon| {
                format!(
                    "{} | category: {} | image: {}",
                    pokemon.name,
                    pokemon.main_type().unwrap_or("unknown"),
                    pokemon.sprite
                )
            })
            .collect()
    }

    /// Print the catalog to stdout, one line per record.
    pub fn show(&self) {
        for line in self.show_lines() {
            println!("{}", line);
        }
    }

    /// Every record whose weight falls within `[min, max]` inclusive, in
    /// list order. Does not mutate the list; an empty or inverted range
    /// yields an empty result.
    pub fn get_by_weight_range(&self, min: i32, max: i32) -> Vec<&Pokemon> {
        self.items
            .iter()
            .filter(|pokemon| pokemon.weight >= min && pokemon.weight <= max)
            .collect()
    }

    /// Sort the list in place, ascending by base experience (stable for
    /// equal keys). Returns the sorted records for chaining; the new order
    /// persists for subsequent reads.
    pub fn sort_by_base_experience(&mut self) -> &[Pokemon] {
        self.items.sort_by_key(|pokemon| pokemon.base_experience);
        &self.items
    }
}

impl PokemonSource for PokemonList {
    fn records(&self) -> &[Pokemon] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefab_pokemon::{bulbasaur, charmander, pikachu};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample_list() -> PokemonList {
        let mut list = PokemonList::new();
        list.add(pikachu());
        list.add_many(vec![bulbasaur(), charmander()]);
        list
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut list = PokemonList::new();
        assert!(list.is_empty());

        list.add(pikachu());
        list.add(bulbasaur());

        assert_eq!(list.len(), 2);
        assert_eq!(list.items[0].name, "Pikachu");
        assert_eq!(list.items[1].name, "Bulbasaur");
    }

    #[test]
    fn test_add_many_preserves_batch_order() {
        let mut list = PokemonList::new();
        list.add_many(vec![pikachu(), bulbasaur(), charmander()]);

        let names: Vec<&str> = list.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pikachu", "Bulbasaur", "Charmander"]);
    }

    #[test]
    fn test_add_allows_duplicate_ids() {
        let mut list = PokemonList::new();
        list.add(pikachu());
        list.add(pikachu());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_by_id_removes_all_matches() {
        let mut list = PokemonList::new();
        list.add_many(vec![pikachu(), bulbasaur(), pikachu()]);

        list.remove_by_id(25);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].name, "Bulbasaur");
    }

    #[test]
    fn test_remove_by_id_miss_is_a_no_op() {
        let mut list = sample_list();
        list.remove_by_id(999);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_by_id_is_idempotent() {
        let mut once = sample_list();
        once.remove_by_id(1);

        let mut twice = sample_list();
        twice.remove_by_id(1);
        twice.remove_by_id(1);

        assert_eq!(once.items, twice.items);
    }

    #[test]
    fn test_removing_every_inserted_id_drains_the_list() {
        let mut list = PokemonList::new();
        list.add_many(vec![pikachu(), bulbasaur(), charmander()]);

        for id in [25, 1, 4] {
            list.remove_by_id(id);
        }
        assert!(list.is_empty());
    }

    #[test]
    fn test_show_lines_format() {
        let mut list = PokemonList::new();
        list.add(pikachu());

        assert_eq!(
            list.show_lines(),
            vec![format!(
                "Pikachu | category: electric | image: {}",
                pikachu().sprite
            )]
        );
    }

    #[test]
    fn test_show_lines_falls_back_to_unknown() {
        let mut list = PokemonList::new();
        list.add(pikachu().with_types(Vec::new()));

        let lines = list.show_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("| category: unknown |"));
    }

    #[rstest]
    #[case(60, 90, vec!["Pikachu", "Bulbasaur", "Charmander"])]
    #[case(60, 70, vec!["Pikachu", "Bulbasaur"])]
    #[case(85, 85, vec!["Charmander"])] // inclusive on both bounds
    #[case(200, 300, vec![])]
    #[case(90, 60, vec![])] // inverted range matches nothing
    fn test_get_by_weight_range(
        #[case] min: i32,
        #[case] max: i32,
        #[case] expected: Vec<&str>,
    ) {
        // Weights: Pikachu 60, Bulbasaur 69, Charmander 85
        let list = sample_list();

        let names: Vec<&str> = list
            .get_by_weight_range(min, max)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_get_by_weight_range_does_not_mutate() {
        let list = sample_list();
        let before = list.items.clone();

        let _ = list.get_by_weight_range(60, 90);
        assert_eq!(list.items, before);
    }

    #[test]
    fn test_get_by_weight_range_results_satisfy_bounds() {
        let list = sample_list();
        for pokemon in list.get_by_weight_range(60, 70) {
            assert!(pokemon.weight >= 60 && pokemon.weight <= 70);
        }
    }

    #[test]
    fn test_sort_by_base_experience_ascending() {
        // Base experience: Pikachu 112, Bulbasaur 64, Charmander 62
        let mut list = sample_list();

        let sorted: Vec<String> = list
            .sort_by_base_experience()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(sorted, vec!["Charmander", "Bulbasaur", "Pikachu"]);

        // The reorder persists in the list itself
        assert_eq!(list.items[0].name, "Charmander");
    }

    #[test]
    fn test_sort_by_base_experience_is_idempotent() {
        let mut list = sample_list();
        list.sort_by_base_experience();
        let once = list.items.clone();

        list.sort_by_base_experience();
        assert_eq!(list.items, once);
    }

    #[test]
    fn test_sort_result_is_non_decreasing() {
        let mut list = sample_list();
        let sorted = list.sort_by_base_experience();

        for pair in sorted.windows(2) {
            assert!(pair[0].base_experience <= pair[1].base_experience);
        }
    }
}
