// Entity Models
//
// - DisasterRecord: stable identity (UUID) + casualty state that only grows
// - ReliefDelivery / FieldStation: compose just the capabilities they use

pub mod record;
pub mod relief;
pub mod station;

pub use record::{DisasterRecord, RecordSnapshot};
pub use relief::ReliefDelivery;
pub use station::FieldStation;
