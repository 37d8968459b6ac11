mod collection;

pub use collection::{CollectionRecord, CollectionStatus, Transporter};
