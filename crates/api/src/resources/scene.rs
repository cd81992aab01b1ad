use sceneboard_core::resource::Labels;
use sceneboard_db::models::scene::{CreateScene, Scene, UpdateScene};
use sceneboard_db::{Repository, Store};

use super::Resource;

/// `/api/scenes`.
pub struct Scenes;

impl Resource for Scenes {
    type Entity = Scene;
    type Create = CreateScene;
    type Update = UpdateScene;

    type View = Scene;
    type Created = Scene;
    type Updated = Scene;

    const LABELS: Labels = Labels {
        entity: "Scene",
        plural: "scenes",
    };
    const PATH: &'static str = "/scenes";

    fn repository(store: &dyn Store) -> &dyn Repository<Scene> {
        store.scenes()
    }
}
