mod appointments;
mod chat;
mod login;
mod schedule;
mod settings;

pub use appointments::AppointmentsPage;
pub use chat::ChatPage;
pub use login::LoginPage;
pub use schedule::SchedulePage;
pub use settings::SettingsPage;
