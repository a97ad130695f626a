pub mod send_contact;

pub use send_contact::send_contact_handler;
