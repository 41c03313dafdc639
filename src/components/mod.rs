pub mod cards;
pub mod forms;
pub mod guard;
pub mod layout;
