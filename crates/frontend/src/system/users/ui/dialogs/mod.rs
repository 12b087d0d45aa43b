mod confirm_delete;
mod create;
mod edit;
mod fields;
mod form;
mod view;

pub use confirm_delete::ConfirmDeleteDialog;
pub use create::CreateUserDialog;
pub use edit::EditUserDialog;
pub use view::ViewUserDialog;
