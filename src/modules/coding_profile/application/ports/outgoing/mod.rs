mod coding_profile_store;

pub use coding_profile_store::{CodingProfilePayload, CodingProfileStore};
