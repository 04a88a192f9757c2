//! Page templates. Each template turns a [`Page`](docpage_types::Page) into a
//! markup tree using the builders from `docpage-template-dsl`.

pub mod native;
