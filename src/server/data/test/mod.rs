mod category;
mod comment;
mod compilation;
mod event;
mod location;
mod rating;
mod request;
mod user;
