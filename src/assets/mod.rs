mod icons;
pub use icons::*;
