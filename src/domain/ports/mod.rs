mod clock_port;
mod id_generator_port;
mod submission_port;

pub use clock_port::Clock;
pub use id_generator_port::IdGenerator;
pub use submission_port::{Receipt, SubmissionPort, SubmissionRequest};

#[cfg(test)]
pub mod mocks {
    pub use super::clock_port::mock::FixedClock;
    pub use super::id_generator_port::mock::SequentialIdGenerator;
    pub use super::submission_port::MockSubmissionPort;
}
