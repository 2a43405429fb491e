use schema::Pokemon;

/// Anything exposing an ordered view of Pokemon records. Lets the query
/// functions below accept a raw slice, an owned `Vec`, or a
/// [`PokemonList`](crate::collection::PokemonList) interchangeably.
pub trait PokemonSource {
    fn records(&self) -> &[Pokemon];
}

impl PokemonSource for [Pokemon] {
    fn records(&self) -> &[Pokemon] {
        self
    }
}

impl PokemonSource for Vec<Pokemon> {
    fn records(&self) -> &[Pokemon] {
        self
    }
}

impl<const N: usize> PokemonSource for [Pokemon; N] {
    fn records(&self) -> &[Pokemon] {
        self
    }
}

/// Find the first record with the given id, scanning in order.
///
/// Traverses recursively, one record per call. Returns `None` once the
/// records are exhausted; never mutates the source.
pub fn find_by_id<S>(source: &S, id: u32) -> Option<&Pokemon>
where
    S: PokemonSource + ?Sized,
{
    fn scan(records: &[Pokemon], id: u32) -> Option<&Pokemon> {
        match records.split_first() {
            None => None,
            Some((head, _)) if head.id == id => Some(head),
            Some((_, tail)) => scan(tail, id),
        }
    }
    scan(source.records(), id)
}

/// The most frequent type tag across all records.
///
/// Every record contributes each of its types to the tally. Counts are
/// keyed in first-seen order and the leader only changes on a strictly
/// greater count, so ties resolve to the first type encountered in scan
/// order. `None` when no record carries any type.
pub fn most_common_type<S>(source: &S) -> Option<String>
where
    S: PokemonSource + ?Sized,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for pokemon in source.records() {
        for type_tag in &pokemon.types {
            match counts.iter_mut().find(|(name, _)| *name == type_tag.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((type_tag.as_str(), 1)),
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Names of every record with an "attack" stat at or above the threshold,
/// in source order. Records without an attack stat never qualify.
pub fn strong_pokemons<S>(source: &S, min_attack: i32) -> Vec<String>
where
    S: PokemonSource + ?Sized,
{
    source
        .records()
        .iter()
        .filter(|pokemon| {
            pokemon
                .stats
                .iter()
                .any(|stat| stat.name == "attack" && stat.value >= min_attack)
        })
        .map(|pokemon| pokemon.name.clone())
        .collect()
}
