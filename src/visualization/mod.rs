pub mod projection;
pub mod planet_vis2d;
