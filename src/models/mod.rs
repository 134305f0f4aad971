pub mod element;
pub mod location;
pub mod screenplay_properties;
pub mod conf;

pub use element::{Element, ElementKind, Emphasis, TextRange};
pub use location::Location;
pub use screenplay_properties::{ScreenplayProperties, Scene};
pub use conf::{Conf, ConfError, ConfResult};
