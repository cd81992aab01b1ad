use sceneboard_core::resource::Labels;
use sceneboard_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use sceneboard_db::{Repository, Store};

use super::Resource;

/// `/api/characters`. Every field is public, so all projections are the row.
pub struct Characters;

impl Resource for Characters {
    type Entity = Character;
    type Create = CreateCharacter;
    type Update = UpdateCharacter;

    type View = Character;
    type Created = Character;
    type Updated = Character;

    const LABELS: Labels = Labels {
        entity: "Character",
        plural: "characters",
    };
    const PATH: &'static str = "/characters";

    fn repository(store: &dyn Store) -> &dyn Repository<Character> {
        store.characters()
    }
}
