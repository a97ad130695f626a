mod planner_store_local;

pub use planner_store_local::{PlannerStoreLocal, PLANNER_STORAGE_KEY};
