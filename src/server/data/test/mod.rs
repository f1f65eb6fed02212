mod conversation;
mod message;
mod people;
mod rdv;
mod store;
