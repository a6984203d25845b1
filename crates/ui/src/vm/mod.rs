mod course_vm;
mod markdown_vm;

pub use course_vm::{
    CourseVm, ModuleContentVm, ModuleRowVm, map_course, map_opened_module,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
