pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::compilation::Entity as Compilation;
pub use super::compilation_event::Entity as CompilationEvent;
pub use super::event::Entity as Event;
pub use super::location::Entity as Location;
pub use super::participation_request::Entity as ParticipationRequest;
pub use super::rating::Entity as Rating;
pub use super::user::Entity as User;
