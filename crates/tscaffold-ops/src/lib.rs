pub mod configure;
pub mod ops_new;
pub mod ops_update;
pub mod render;
pub mod tsconfig;
