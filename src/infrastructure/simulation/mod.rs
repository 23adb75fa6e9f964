//! Simulated adapters for the outside world.

mod clock;
mod collaborators;
mod id_generator;

pub use clock::SystemClock;
pub use collaborators::SimulatedCollaborators;
pub use id_generator::TimestampIdGenerator;
