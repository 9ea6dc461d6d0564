use async_trait::async_trait;

// Repository abstracts an owned, in-memory collection of entities whose ids are
// assigned by the store. Lookups that miss are normal results, not errors.
#[async_trait]
pub trait Repository<Entity, Draft>: Sync + Send {
    // create an entity from a draft, assigning its id
    async fn create(&self, draft: &Draft) -> Entity;

    // updates an entity in place, keeping its id
    async fn update(&self, id: i64, draft: &Draft) -> Option<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> Option<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> bool;

    // all entities in insertion order
    async fn list(&self) -> Vec<Entity>;
}
