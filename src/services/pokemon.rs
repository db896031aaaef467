//! Service used to browse Pokemon. Used by the pokemons REST API.

use std::cmp::min;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToResponse;

use crate::data::dex::Dex;
use crate::models::pokemon::Pokemon;
use crate::models::pokemon_type::PokemonType;

/// Service implementation for [`Pokemon`] entities.
///
/// Pokemon are looked up in the [`Dex`] by name (case-insensitive). This service is used by the
/// [pokemons REST API endpoint implementations](crate::api::v1::pokemons).
#[derive(Debug, Clone)]
pub struct Service {
    dex: Arc<Dex>,
}

impl Service {
    /// Max number of Pokemon that can be fetched per page when [listing](Service::get_pokemons).
    pub const MAX_PAGE_SIZE: i64 = 100;

    /// Creates a new pokemon service using the provided [`Dex`].
    pub fn new(dex: Arc<Dex>) -> Self {
        Self { dex }
    }

    /// Lists [`Pokemon`]s in a paginated way, optionally keeping only those having a given type.
    ///
    /// Pokemon are listed in seed file order. See [`PokemonsPage`] for details on the returned data.
    pub fn get_pokemons(
        &self,
        page: i64,
        page_size: i64,
        pokemon_type: Option<PokemonType>,
    ) -> PokemonsPage {
        let page_size = min(page_size, Self::MAX_PAGE_SIZE).max(1);
        let page = page.max(1);

        let matching: Vec<&Pokemon> = match pokemon_type {
            Some(pokemon_type) => self.dex.pokemon_by_type(pokemon_type).collect(),
            None => self.dex.all_pokemon().iter().collect(),
        };

        let total_pages = (matching.len() as i64 + page_size - 1) / page_size;
        // Pages too far out to index are simply empty.
        let offset = (page - 1)
            .checked_mul(page_size)
            .and_then(|offset| usize::try_from(offset).ok())
            .unwrap_or(usize::MAX);
        let pokemons = matching
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect();

        PokemonsPage { pokemons, page, page_size, total_pages }
    }

    /// Returns the [`Pokemon`] with the given name.
    pub fn get_pokemon(&self, name: &str) -> crate::Result<Pokemon> {
        self.dex.pokemon(name).cloned()
    }
}

#[cfg_attr(
    doc,
    doc = r"
        A page of [`Pokemon`]s, as returned by [`Service::get_pokemons`].

        Contains the list of [`Pokemon`]s in the page as well as paging information.
    "
)]
#[cfg_attr(not(doc), doc = "A page of Pokemons")]
#[derive(Debug, Serialize, Deserialize, ToResponse)]
#[response(example = json!({
    "pokemons": [
        {
            "name": "Bulbasaur",
            "types": ["Grass", "Poison"]
        }
    ],
    "page": 1,
    "page_size": 10,
    "total_pages": 31
}))]
pub struct PokemonsPage {
    /// The Pokemons in the page
    pub pokemons: Vec<Pokemon>,

    /// Current page number (1-based)
    pub page: i64,

    /// Page size used when listing
    pub page_size: i64,

    /// Total number of pages available
    pub total_pages: i64,
}
