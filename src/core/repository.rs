use crate::core::library::{LibraryResult, PageRequest, PaginatedResult};

// Repository operations are synchronous: implementations hold their data in memory and
// never suspend while a lock is held.
pub trait Repository<Entity>: Sync + Send {
    // create an entity and return its assigned id
    fn create(&self, entity: Entity) -> LibraryResult<String>;

    // replaces an existing entity
    fn update(&self, entity: Entity) -> LibraryResult<usize>;

    // get a snapshot of an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&self, id: &str) -> LibraryResult<usize>;

    // page through all entities
    fn query(&self, page: PageRequest) -> LibraryResult<PaginatedResult<Entity>>;
}
