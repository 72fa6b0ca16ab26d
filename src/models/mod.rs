pub mod activity;
pub mod activity_participant;
pub mod participant;

pub use activity::{ActivityRow, NewActivity};
pub use activity_participant::ActivityParticipantEmailRow;
pub use participant::ParticipantRow;
