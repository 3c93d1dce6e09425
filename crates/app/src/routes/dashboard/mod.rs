mod admin;
mod organizer;
mod participant;

pub use admin::AdminDashboard;
pub use organizer::OrganizerDashboard;
pub use participant::ParticipantDashboard;
