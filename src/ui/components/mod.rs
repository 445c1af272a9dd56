pub mod confirm_dialog;
pub mod message_form;
pub mod message_list;
pub mod status_line;
pub mod toolbar;
