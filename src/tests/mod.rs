// End-to-end cache behavior tests.

pub mod support;
