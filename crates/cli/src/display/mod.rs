pub mod project_report;
pub mod report;

pub use project_report::{print_build_context, print_dependencies, print_scan_packages};
pub use report::{print_banner, print_field, print_footer, print_list, print_section};
