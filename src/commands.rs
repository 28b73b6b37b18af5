mod cmd_available;
mod cmd_exists;
mod cmd_list;

pub use cmd_available::check_available;
pub use cmd_exists::container_exists;
pub use cmd_list::print_containers;
